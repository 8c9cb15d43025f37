//! # Tintero Client
//!
//! `tintero-client` is the single gateway through which all HTTP calls to
//! the Tintero backend flow. It attaches bearer credentials sourced from an
//! injected [`TokenProvider`], normalizes the `{success, message, data}`
//! response envelope, and centralizes endpoint paths.
//!
//! Every call is a single best-effort round trip: no retries, no caching,
//! no client-side timeout beyond the transport's own.

#![warn(missing_docs)]

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use tintero_core::{
    ApiError, ApiResponse, ApiResult, AuthGateway, LoginResponse, PagedResponse,
    RefreshResponse, RegisterResponse, TokenProvider,
};

/// Client configuration: base URL and endpoint table.
pub mod config;

/// Blog post wire types and listing filters.
pub mod blog;

mod response;

pub use crate::blog::{
    BlogPost, BlogTag, CreatePostData, DeletePostResponse, LikeAction, LikePostResponse,
    ListPostsQuery, PostIdResponse, PostImage, PostStatus, UpdatePostData,
};
pub use crate::config::{ClientConfig, Endpoints};

/// HTTP client for the Tintero backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Option<Arc<dyn TokenProvider>>,
}

impl ApiClient {
    /// Build a client for the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens: None,
        }
    }

    /// Build a client from [`config::ENV_BASE_URL`] / the localhost default.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Attach the source of bearer tokens for authenticated requests.
    pub fn with_token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    /// Start a request with the default headers and, when a token is
    /// available, the `Authorization` header. Headers set later by the
    /// caller take precedence.
    fn prepare(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, self.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(token) = self.tokens.as_ref().and_then(|t| t.access_token()) {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    /// Issue a request and normalize the response. Errors are logged and
    /// rethrown, never recovered here.
    async fn send<E: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> ApiResult<E> {
        let mut request = self.prepare(method, endpoint);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| {
            log::error!("request to {endpoint} failed: {e}");
            ApiError::from(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            log::error!("reading response from {endpoint} failed: {e}");
            ApiError::from(e)
        })?;
        response::decode_body(status, &body).map_err(|e| {
            log::error!("{endpoint} returned an error: {e}");
            e
        })
    }

    fn post_item_endpoint(&self, id: &str, action: &str) -> String {
        format!("{}/{id}{action}", self.config.endpoints.blog_posts)
    }

    // Blog operations. CRUD is delegated entirely to the backend; these
    // only marshal requests and responses.

    /// List posts, optionally filtered. Absent filters are not sent.
    pub async fn list_posts(
        &self,
        query: Option<&ListPostsQuery>,
    ) -> ApiResult<PagedResponse<Vec<BlogPost>>> {
        let mut endpoint = self.config.endpoints.blog_posts.to_owned();
        if let Some(query_string) = query.and_then(ListPostsQuery::to_query_string) {
            endpoint = format!("{endpoint}?{query_string}");
        }
        self.send(Method::GET, &endpoint, None).await
    }

    /// Create a post.
    pub async fn create_post(
        &self,
        data: &CreatePostData,
    ) -> ApiResult<ApiResponse<PostIdResponse>> {
        let body = serde_json::to_value(data)?;
        self.send(Method::POST, self.config.endpoints.blog_posts, Some(&body))
            .await
    }

    /// Update an existing post. Absent fields are left untouched.
    pub async fn update_post(
        &self,
        id: &str,
        data: &UpdatePostData,
    ) -> ApiResult<ApiResponse<PostIdResponse>> {
        let body = serde_json::to_value(data)?;
        self.send(Method::PUT, &self.post_item_endpoint(id, ""), Some(&body))
            .await
    }

    /// Delete a post. The payload lists CDN images to clean up.
    pub async fn delete_post(&self, id: &str) -> ApiResult<ApiResponse<DeletePostResponse>> {
        self.send(Method::DELETE, &self.post_item_endpoint(id, ""), None)
            .await
    }

    /// Move a draft to the public blog.
    pub async fn publish_post(&self, id: &str) -> ApiResult<ApiResponse<PostIdResponse>> {
        self.send(Method::POST, &self.post_item_endpoint(id, "/publish"), None)
            .await
    }

    /// Toggle the caller's like on a post.
    pub async fn like_post(&self, id: &str) -> ApiResult<ApiResponse<LikePostResponse>> {
        self.send(Method::POST, &self.post_item_endpoint(id, "/like"), None)
            .await
    }
}

/// Unwrap a success envelope, insisting on its payload.
fn expect_payload<T>(envelope: ApiResponse<T>, operation: &str) -> ApiResult<T> {
    match envelope.data {
        Some(data) if envelope.success => Ok(data),
        _ => {
            log::error!("{operation} answered without a payload: {}", envelope.message);
            Err(ApiError::MissingPayload(operation.to_owned()))
        }
    }
}

#[async_trait]
impl AuthGateway for ApiClient {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<RegisterResponse> {
        let body = json!({ "name": name, "email": email, "password": password });
        let envelope = self
            .send(Method::POST, self.config.endpoints.register, Some(&body))
            .await?;
        expect_payload(envelope, "register")
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = json!({ "email": email, "password": password });
        let envelope = self
            .send(Method::POST, self.config.endpoints.login, Some(&body))
            .await?;
        expect_payload(envelope, "login")
    }

    async fn logout(&self, refresh_token: &str) -> ApiResult<()> {
        let body = json!({ "refresh_token": refresh_token });
        let _: ApiResponse<Value> = self
            .send(Method::POST, self.config.endpoints.logout, Some(&body))
            .await?;
        Ok(())
    }

    async fn refresh(&self, refresh_token: &str) -> ApiResult<RefreshResponse> {
        let body = json!({ "refresh_token": refresh_token });
        let envelope = self
            .send(Method::POST, self.config.endpoints.refresh, Some(&body))
            .await?;
        expect_payload(envelope, "refresh")
    }
}
