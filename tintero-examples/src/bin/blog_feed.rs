//! Print the public blog feed.
//!
//! Reads the backend origin from `TINTERO_API_URL` (defaults to
//! `http://localhost:8001`); no authentication needed.

use tintero_client::{ApiClient, ListPostsQuery, PostStatus};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let client = ApiClient::from_env();
    let query = ListPostsQuery {
        status: Some(PostStatus::Published),
        page: Some(1),
        limit: Some(9),
        ..Default::default()
    };

    match client.list_posts(Some(&query)).await {
        Ok(envelope) => {
            let posts = envelope.data.unwrap_or_default();
            println!("{} posts", posts.len());
            for post in &posts {
                println!("- {} ({} likes) by {}", post.title, post.likes_count, post.author_name);
            }
            if let Some(pagination) = envelope.pagination {
                println!("page {} of {} total posts", pagination.page, pagination.count);
            }
        }
        Err(e) => {
            eprintln!("could not load the feed: {}", tintero::user_message(&e));
            std::process::exit(1);
        }
    }
}
