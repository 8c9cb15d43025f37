//! Walk a session through login, refresh and logout.
//!
//! Expects `TINTERO_EMAIL` and `TINTERO_PASSWORD` in the environment
//! (or a `.env` file). The session is persisted next to the binary in
//! `auth-storage.json` and restored on the next run.

use std::sync::Arc;

use tintero_client::ApiClient;
use tintero_core::user_message;
use tintero_session::{FileStore, SessionManager, SharedSession};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let email = std::env::var("TINTERO_EMAIL").expect("TINTERO_EMAIL must be set");
    let password = std::env::var("TINTERO_PASSWORD").expect("TINTERO_PASSWORD must be set");

    // One shared handle: the manager writes it, the client reads the
    // bearer token from it.
    let shared = SharedSession::new();
    let client = Arc::new(ApiClient::from_env().with_token_provider(Arc::new(shared.clone())));
    let manager = SessionManager::with_shared(
        client.clone(),
        Arc::new(FileStore::in_dir(".")),
        shared,
    );

    manager.restore().await;
    if manager.state().is_authenticated {
        println!("restored a persisted session");
    } else if let Err(e) = manager.login(&email, &password).await {
        eprintln!("sign-in failed: {e}");
        std::process::exit(1);
    }

    let state = manager.state();
    println!(
        "signed in as {} <{}>",
        state.user.as_ref().map(|u| u.name.as_str()).unwrap_or("?"),
        email
    );

    match manager.refresh().await {
        Ok(()) => println!("access token refreshed"),
        Err(e) => eprintln!("refresh failed: {e}"),
    }

    // Authenticated call through the same client: the bearer token is
    // attached automatically.
    match client.list_posts(None).await {
        Ok(envelope) => println!("{} posts visible", envelope.data.unwrap_or_default().len()),
        Err(e) => eprintln!("listing failed: {}", user_message(&e)),
    }

    manager.logout().await;
    println!("signed out; the persisted session is now anonymous");
}
