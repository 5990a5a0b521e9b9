//! Typed REST client for the whiteboard backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the send path reports [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Requests are first built as plain [`ApiRequest`] values carrying the base
//! URL and a JSON content type. Registered interceptors then run in order
//! and may rewrite headers before the request hits the wire. The default
//! client installs [`bearer_interceptor`], which re-reads the token store on
//! every request.
//!
//! ERROR HANDLING
//! ==============
//! No retry or translation: callers get an [`ApiError`] describing what the
//! transport reported and decide how to present it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::token_store::{LocalStorageTokenStore, TokenStore};
use super::types::{
    Board, BoardElement, CreateBoardElementRequest, CreateBoardRequest, LoginRequest,
    LoginResponse, RegisterRequest, UpdateBoardElementRequest, User,
};
use crate::config::{configured_api_base_url, resolve_api_base_url};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_MIME: &str = "application/json";

/// HTTP verbs used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// An outgoing request before it is handed to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL (base URL + path).
    pub url: String,
    /// Header pairs in insertion order; names compare case-insensitively.
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Value of header `name`, if set.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set header `name`, replacing any existing value.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.remove_header(name);
        self.headers.push((name.to_owned(), value.into()));
    }

    /// Remove every value of header `name`.
    pub fn remove_header(&mut self, name: &str) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    }
}

/// Hook run on every outgoing request before it is sent.
pub type Interceptor = Arc<dyn Fn(&mut ApiRequest) + Send + Sync>;

/// Failure reported by the transport or while decoding the response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Format an `Authorization` header value for `token`.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Interceptor attaching `Authorization: Bearer <token>` when `store` has a
/// token. Without a token the header is removed rather than left blank.
pub fn bearer_interceptor(store: Arc<dyn TokenStore>) -> Interceptor {
    Arc::new(move |request: &mut ApiRequest| match store.token() {
        Some(token) => request.set_header(AUTHORIZATION, bearer_value(&token)),
        None => request.remove_header(AUTHORIZATION),
    })
}

fn board_endpoint(board_id: &str) -> String {
    format!("/api/boards/{board_id}")
}

fn board_elements_endpoint(board_id: &str) -> String {
    format!("/api/boards/{board_id}/elements")
}

fn board_element_endpoint(board_id: &str, element_id: &str) -> String {
    format!("/api/boards/{board_id}/elements/{element_id}")
}

/// Configured request client shared through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    store: Arc<dyn TokenStore>,
    interceptors: Vec<Interceptor>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client for `base_url` with the bearer interceptor reading `store`.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Self {
        let interceptors = vec![bearer_interceptor(Arc::clone(&store))];
        Self {
            base_url: base_url.into(),
            store,
            interceptors,
        }
    }

    /// Browser client: base URL from the build environment, token from
    /// `localStorage`.
    pub fn from_env() -> Self {
        Self::new(
            resolve_api_base_url(configured_api_base_url()),
            Arc::new(LocalStorageTokenStore),
        )
    }

    /// Append an interceptor; it runs after the ones already registered.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: Interceptor) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some()
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Build the request for `method path` and run every interceptor on it.
    pub fn prepare(&self, method: Method, path: &str, body: Option<String>) -> ApiRequest {
        let mut request = ApiRequest {
            method,
            url: self.url(path),
            headers: vec![(CONTENT_TYPE.to_owned(), JSON_MIME.to_owned())],
            body,
        };
        for interceptor in &self.interceptors {
            interceptor(&mut request);
        }
        request
    }

    /// Send a prepared request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let result = transport::send::<T>(request).await;
        if let Err(e) = &result {
            leptos::logging::warn!("api {} {url} failed: {e}", method.as_str());
        }
        result
    }

    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(self.prepare(method, path, body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::Get, path, None).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Post, path, Some(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Put, path, Some(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Patch, path, Some(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::Delete, path, None).await
    }

    /// Persist the token from a successful login/register response.
    fn accept_session(&self, response: LoginResponse) -> LoginResponse {
        self.store.set_token(&response.token);
        response
    }

    /// Log in via `POST /auth/login` and persist the returned token.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; the stored token is untouched on failure.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.post("/auth/login", request).await?;
        Ok(self.accept_session(response))
    }

    /// Create an account via `POST /auth/register` and persist the token.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        let response = self.post("/auth/register", request).await?;
        Ok(self.accept_session(response))
    }

    /// End the session locally. The backend keeps no session to revoke.
    pub fn logout(&self) {
        self.store.clear_token();
    }

    /// Fetch the authenticated user from `GET /users/me`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn fetch_current_user(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn list_boards(&self) -> Result<Vec<Board>, ApiError> {
        self.get("/api/boards/list").await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn create_board(&self, request: &CreateBoardRequest) -> Result<Board, ApiError> {
        self.post("/api/boards/", request).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn fetch_board(&self, board_id: &str) -> Result<Board, ApiError> {
        self.get(&board_endpoint(board_id)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn create_element(
        &self,
        board_id: &str,
        request: &CreateBoardElementRequest,
    ) -> Result<BoardElement, ApiError> {
        self.post(&board_elements_endpoint(board_id), request).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`]. A stale `expected_version` comes back as a
    /// [`ApiError::Status`].
    pub async fn update_element(
        &self,
        board_id: &str,
        element_id: &str,
        request: &UpdateBoardElementRequest,
    ) -> Result<BoardElement, ApiError> {
        self.patch(&board_element_endpoint(board_id, element_id), request).await
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};
    use serde::de::DeserializeOwned;

    use super::{ApiError, ApiRequest, Method};

    fn http_method(method: Method) -> HttpMethod {
        match method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Patch => HttpMethod::PATCH,
            Method::Delete => HttpMethod::DELETE,
        }
    }

    pub(super) async fn send<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
        let mut builder = RequestBuilder::new(&request.url).method(http_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let outgoing = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = outgoing
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(not(feature = "hydrate"))]
mod transport {
    use serde::de::DeserializeOwned;

    use super::{ApiError, ApiRequest};

    pub(super) async fn send<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
