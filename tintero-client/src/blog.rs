use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a blog post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Visible on the public blog.
    Published,
    /// Only visible in the admin panel.
    Draft,
    /// Retired from the public blog but retained.
    Archived,
}

impl PostStatus {
    /// Wire representation, as used in query strings and JSON bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Published => "published",
            PostStatus::Draft => "draft",
            PostStatus::Archived => "archived",
        }
    }
}

/// A tag attached to a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogTag {
    /// Backend-assigned tag identifier.
    pub id_tag: u32,
    /// Display name.
    pub name: String,
    /// URL-safe slug.
    pub slug: String,
}

/// A blog post as the backend reports it. The client only marshals
/// posts; all lifecycle logic lives server-side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlogPost {
    /// Backend-assigned post identifier.
    pub id_post: String,
    /// Post title.
    pub title: String,
    /// Short summary shown on listing cards.
    pub excerpt: String,
    /// Full body in Markdown.
    pub content_markdown: String,
    /// Cover image location.
    pub cover_image_url: String,
    /// Publication state.
    pub status: PostStatus,
    /// Number of likes.
    pub likes_count: u64,
    /// When the post went public. Absent for drafts.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Author display name.
    pub author_name: String,
    /// Author email.
    pub author_email: String,
    /// Tags attached to the post.
    #[serde(default)]
    pub tags: Vec<BlogTag>,
}

/// Optional filters for the post listing endpoint. Absent fields are
/// omitted from the query string entirely.
#[derive(Clone, Debug, Default)]
pub struct ListPostsQuery {
    /// Restrict to one publication state.
    pub status: Option<PostStatus>,
    /// Restrict to one author.
    pub author_id: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListPostsQuery {
    /// Serialize the present filters into a query string, or `None`
    /// when every filter is absent.
    pub fn to_query_string(&self) -> Option<String> {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        let mut any = false;
        if let Some(status) = self.status {
            serializer.append_pair("status", status.as_str());
            any = true;
        }
        if let Some(author_id) = &self.author_id {
            serializer.append_pair("author_id", author_id);
            any = true;
        }
        if let Some(page) = self.page {
            serializer.append_pair("page", &page.to_string());
            any = true;
        }
        if let Some(limit) = self.limit {
            serializer.append_pair("limit", &limit.to_string());
            any = true;
        }
        any.then(|| serializer.finish())
    }
}

/// An image uploaded alongside a post.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PostImage {
    /// Public location of the image.
    pub url: String,
    /// Identifier in the image CDN, used for cleanup on delete.
    pub cloudinary_id: String,
    /// Accessibility text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// Request body for creating a post.
#[derive(Clone, Debug, Serialize)]
pub struct CreatePostData {
    /// Post title.
    pub title: String,
    /// Full body in Markdown.
    pub content_markdown: String,
    /// Short summary shown on listing cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Cover image location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// Initial publication state; the backend defaults to draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    /// Tags to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u32>>,
    /// Uploaded images referenced by the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<PostImage>>,
}

/// Request body for updating a post. Every field is optional; absent
/// fields are left untouched server-side.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdatePostData {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_markdown: Option<String>,
    /// New summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// New cover image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// Replacement tag set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u32>>,
}

/// Payload returned by create, update and publish operations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PostIdResponse {
    /// Identifier of the affected post.
    pub id_post: String,
}

/// Payload returned when a post is deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeletePostResponse {
    /// CDN identifiers of images that should be cleaned up.
    #[serde(default)]
    pub cloudinary_ids: Vec<String>,
}

/// Direction of a like toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    /// The caller's like was added.
    Liked,
    /// The caller's like was removed.
    Unliked,
}

/// Payload returned by the like endpoint.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LikePostResponse {
    /// What the toggle did.
    pub action: LikeAction,
    /// Like count after the toggle.
    pub likes_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_string_contains_exactly_the_present_filters() {
        let query = ListPostsQuery {
            status: Some(PostStatus::Published),
            author_id: None,
            page: Some(2),
            limit: Some(9),
        };
        assert_eq!(
            query.to_query_string().unwrap(),
            "status=published&page=2&limit=9"
        );
    }

    #[test]
    fn empty_query_serializes_to_none() {
        assert_eq!(ListPostsQuery::default().to_query_string(), None);
    }

    #[test]
    fn single_filters_serialize_alone() {
        let author_only = ListPostsQuery {
            author_id: Some("u-9".to_owned()),
            ..Default::default()
        };
        assert_eq!(author_only.to_query_string().unwrap(), "author_id=u-9");

        let limit_only = ListPostsQuery {
            limit: Some(50),
            ..Default::default()
        };
        assert_eq!(limit_only.to_query_string().unwrap(), "limit=50");
    }

    #[test]
    fn create_body_omits_absent_fields() {
        let data = CreatePostData {
            title: "Hola".to_owned(),
            content_markdown: "# Hola".to_owned(),
            excerpt: None,
            cover_image_url: None,
            status: Some(PostStatus::Draft),
            tag_ids: None,
            images: None,
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "title": "Hola",
                "content_markdown": "# Hola",
                "status": "draft",
            })
        );
    }

    #[test]
    fn update_body_serializes_only_changed_fields() {
        let data = UpdatePostData {
            excerpt: Some("Resumen".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({ "excerpt": "Resumen" })
        );
    }

    #[test]
    fn post_deserializes_from_the_wire_shape() {
        let body = json!({
            "id_post": "p-1",
            "title": "Hola",
            "excerpt": "Resumen",
            "content_markdown": "# Hola",
            "cover_image_url": "https://cdn.example/c.jpg",
            "status": "published",
            "likes_count": 3,
            "published_at": "2025-06-01T12:00:00Z",
            "created_at": "2025-05-30T08:00:00Z",
            "updated_at": "2025-06-01T12:00:00Z",
            "author_name": "Ana",
            "author_email": "ana@x.com",
            "tags": [{"id_tag": 1, "name": "Rust", "slug": "rust"}]
        });
        let post: BlogPost = serde_json::from_value(body).unwrap();
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.tags[0].slug, "rust");
    }

    #[test]
    fn draft_posts_may_lack_published_at() {
        let body = json!({
            "id_post": "p-2",
            "title": "Borrador",
            "excerpt": "",
            "content_markdown": "",
            "cover_image_url": "",
            "status": "draft",
            "likes_count": 0,
            "published_at": null,
            "created_at": "2025-05-30T08:00:00Z",
            "updated_at": "2025-05-30T08:00:00Z",
            "author_name": "Ana",
            "author_email": "ana@x.com",
            "tags": []
        });
        let post: BlogPost = serde_json::from_value(body).unwrap();
        assert!(post.published_at.is_none());
        assert_eq!(post.status, PostStatus::Draft);
    }
}
