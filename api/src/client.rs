//! HTTP operations on the users collection.

use reqwest::Response;
use store::{User, UserFields};

use crate::{ApiConfig, ApiError};

/// Client scoped to one backend's users collection.
///
/// Cheap to construct per call site; the inner [`reqwest::Client`] pools
/// connections on native targets and rides the browser fetch API on wasm.
/// No timeout is configured.
#[derive(Clone, Debug)]
pub struct UsersApi {
    http: reqwest::Client,
    base: String,
    backend: String,
}

impl UsersApi {
    pub fn new(config: &ApiConfig, backend: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.api_url.clone(),
            backend: backend.into(),
        }
    }

    /// The backend name this client is scoped to.
    pub fn backend(&self) -> &str {
        &self.backend
    }

    fn collection_url(&self) -> String {
        format!("{}/api/{}/users", self.base, self.backend)
    }

    fn entry_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Fetch the full collection, in the order the backend keeps it.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let resp = ok(self.http.get(self.collection_url()).send().await?)?;
        Ok(resp.json().await?)
    }

    /// Fetch a single user.
    pub async fn get(&self, id: i32) -> Result<User, ApiError> {
        let url = self.entry_url(&id.to_string());
        let resp = ok(self.http.get(url).send().await?)?;
        Ok(resp.json().await?)
    }

    /// Create a user; the backend assigns and returns the id.
    pub async fn create(&self, fields: &UserFields) -> Result<User, ApiError> {
        let resp = ok(self
            .http
            .post(self.collection_url())
            .json(fields)
            .send()
            .await?)?;
        Ok(resp.json().await?)
    }

    /// Update a user's fields. The id is sent in the path exactly as given,
    /// numeric or not; the response body is not consumed.
    pub async fn update(&self, id: &str, fields: &UserFields) -> Result<(), ApiError> {
        ok(self.http.put(self.entry_url(id)).json(fields).send().await?)?;
        Ok(())
    }

    /// Delete a user; the response body is not consumed.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let url = self.entry_url(&id.to_string());
        ok(self.http.delete(url).send().await?)?;
        Ok(())
    }
}

/// Like `error_for_status`, but keeps the status directly matchable.
fn ok(resp: Response) -> Result<Response, ApiError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> UsersApi {
        UsersApi::new(&ApiConfig::default(), "rust")
    }

    #[test]
    fn collection_url_is_namespaced_by_backend() {
        assert_eq!(
            api().collection_url(),
            "http://localhost:8080/api/rust/users"
        );
    }

    #[test]
    fn other_backends_get_their_own_namespace() {
        let api = UsersApi::new(&ApiConfig::new("https://crud.example.com"), "go");
        assert_eq!(api.collection_url(), "https://crud.example.com/api/go/users");
        assert_eq!(api.backend(), "go");
    }

    #[test]
    fn entry_url_keeps_the_id_text_as_given() {
        assert_eq!(
            api().entry_url("7"),
            "http://localhost:8080/api/rust/users/7"
        );
        // Raw draft text goes through untouched; the server decides.
        assert_eq!(
            api().entry_url("seven"),
            "http://localhost:8080/api/rust/users/seven"
        );
    }
}
