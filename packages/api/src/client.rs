//! # Typed HTTP client for the Meu Pet Club API
//!
//! [`ApiClient`] translates domain operations into single best-effort HTTP
//! round trips against one fixed origin. Every request carries a JSON content
//! type and, when a session token is present, a bearer authorization header.
//! There are no retries, no caching and no request deduplication; a non-2xx
//! status short-circuits into [`ApiError::Status`] without attempting to
//! parse a structured error body.

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{NewUser, Pet, PetDraft, SessionRecord, User};

/// Origin the deployed application talks to. Override at build time with
/// `PETCLUB_API_URL`, or per instance with [`ApiClient::with_base_url`].
pub const DEFAULT_BASE_URL: &str = "http://184.73.58.148:3333/api";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client against the configured origin, carrying `token` on every
    /// request when present.
    pub fn new(token: Option<String>) -> Self {
        let base_url = option_env!("PETCLUB_API_URL").unwrap_or(DEFAULT_BASE_URL);
        Self::with_base_url(base_url, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn expect_json<T: DeserializeOwned>(
        op: &'static str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::Status {
                op,
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// Exchange credentials for a token and the authenticated user.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, ApiError> {
        let response = self
            .request(Method::POST, "/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        match response.status().as_u16() {
            401 | 403 => Err(ApiError::InvalidCredentials),
            _ => Self::expect_json("login", response).await,
        }
    }

    pub async fn list_pets(&self) -> Result<Vec<Pet>, ApiError> {
        let response = self.request(Method::GET, "/pets").send().await?;
        Self::expect_json("list pets", response).await
    }

    /// A missing record is not distinguished from other failures; the server
    /// contract does not expose that difference at this layer.
    pub async fn get_pet(&self, id: &str) -> Result<Pet, ApiError> {
        let response = self.request(Method::GET, &format!("/pets/{id}")).send().await?;
        Self::expect_json("get pet", response).await
    }

    pub async fn create_pet(&self, draft: &PetDraft) -> Result<Pet, ApiError> {
        let response = self
            .request(Method::POST, "/pets")
            .json(draft)
            .send()
            .await?;
        Self::expect_json("create pet", response).await
    }

    /// Full-replace update: the entire editable field set is resent.
    pub async fn update_pet(&self, id: &str, draft: &PetDraft) -> Result<Pet, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/pets/{id}"))
            .json(draft)
            .send()
            .await?;
        Self::expect_json("update pet", response).await
    }

    pub async fn delete_pet(&self, id: &str) -> Result<Pet, ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/pets/{id}"))
            .send()
            .await?;
        Self::expect_json("delete pet", response).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.request(Method::GET, "/users").send().await?;
        Self::expect_json("list users", response).await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let response = self
            .request(Method::GET, &format!("/users/{id}"))
            .send()
            .await?;
        Self::expect_json("get user", response).await
    }

    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        let response = self
            .request(Method::POST, "/users")
            .json(new_user)
            .send()
            .await?;
        Self::expect_json("create user", response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pet_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "name": name,
            "species": "Dog",
            "breed": "Labrador",
            "age": 3,
            "weight": 25.5,
            "description": "Friendly",
            "owner": { "_id": "u1", "name": "Ana", "email": "ana@example.com" },
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        })
    }

    fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
        ApiClient::with_base_url(server.uri(), token.map(str::to_string))
    }

    #[tokio::test]
    async fn list_pets_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pets"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![pet_json("p1", "Rex")]))
            .expect(1)
            .mount(&server)
            .await;

        let pets = client(&server, Some("tok-1")).list_pets().await.unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].name, "Rex");
    }

    #[tokio::test]
    async fn create_pet_round_trips_editable_fields() {
        let server = MockServer::start().await;
        let draft = PetDraft {
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            breed: "Labrador".to_string(),
            age: 3,
            weight: 25.5,
            description: "Friendly".to_string(),
        };
        Mock::given(method("POST"))
            .and(path("/pets"))
            .and(body_json(&draft))
            .respond_with(ResponseTemplate::new(201).set_body_json(pet_json("p9", "Rex")))
            .expect(1)
            .mount(&server)
            .await;

        let created = client(&server, Some("tok-1")).create_pet(&draft).await.unwrap();
        assert_eq!(created.id, "p9");
        assert_eq!(created.draft(), draft);
        assert_eq!(created.owner.id(), "u1");
    }

    #[tokio::test]
    async fn update_pet_puts_the_full_field_set() {
        let server = MockServer::start().await;
        let draft = PetDraft {
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            breed: "Labrador".to_string(),
            age: 4,
            weight: 26.0,
            description: "".to_string(),
        };
        Mock::given(method("PUT"))
            .and(path("/pets/p9"))
            .and(body_json(&draft))
            .respond_with(ResponseTemplate::new(200).set_body_json(pet_json("p9", "Rex")))
            .expect(1)
            .mount(&server)
            .await;

        client(&server, None).update_pet("p9", &draft).await.unwrap();
    }

    #[tokio::test]
    async fn delete_pet_returns_the_deleted_record() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/pets/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(pet_json("p1", "Rex")))
            .mount(&server)
            .await;

        let deleted = client(&server, None).delete_pet("p1").await.unwrap();
        assert_eq!(deleted.id, "p1");
    }

    #[tokio::test]
    async fn non_success_status_maps_to_per_operation_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pets/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server, None).get_pet("missing").await.unwrap_err();
        match err {
            ApiError::Status { op, status } => {
                assert_eq!(op, "get pet");
                assert_eq!(status, 404);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_network_error() {
        // Nothing listens on port 1.
        let client = ApiClient::with_base_url("http://127.0.0.1:1", None);
        let err = client.list_pets().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn login_returns_token_and_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(serde_json::json!({
                "email": "ana@example.com",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "tok-1",
                "user": { "_id": "u1", "name": "Ana", "email": "ana@example.com", "role": "CLIENT" }
            })))
            .mount(&server)
            .await;

        let record = client(&server, None)
            .login("ana@example.com", "secret")
            .await
            .unwrap();
        assert_eq!(record.token, "tok-1");
        assert_eq!(record.user.email, "ana@example.com");
    }

    #[tokio::test]
    async fn rejected_login_maps_to_invalid_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client(&server, None)
            .login("ana@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn list_users_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(header("authorization", "Bearer tok-adm"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "_id": "u1", "name": "Ana", "email": "ana@example.com", "role": "ADMIN" },
                { "_id": "u2", "name": "Bia", "email": "bia@example.com", "role": "CLIENT" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let users = client(&server, Some("tok-adm")).list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].role.is_admin());
        assert_eq!(users[1].email, "bia@example.com");
    }

    #[tokio::test]
    async fn get_user_fetches_a_single_account() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/u2"))
            .and(header("authorization", "Bearer tok-adm"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_id": "u2", "name": "Bia", "email": "bia@example.com", "role": "CLIENT"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client(&server, Some("tok-adm")).get_user("u2").await.unwrap();
        assert_eq!(user.id, "u2");
        assert_eq!(user.role, Role::Client);
    }

    #[tokio::test]
    async fn create_user_serializes_role_wire_name() {
        let server = MockServer::start().await;
        let new_user = NewUser {
            name: "Bia".to_string(),
            email: "bia@example.com".to_string(),
            password: "secret123".to_string(),
            role: Role::Client,
        };
        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(serde_json::json!({
                "name": "Bia",
                "email": "bia@example.com",
                "password": "secret123",
                "role": "CLIENT"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "_id": "u2", "name": "Bia", "email": "bia@example.com", "role": "CLIENT"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = client(&server, Some("tok-adm")).create_user(&new_user).await.unwrap();
        assert_eq!(created.id, "u2");
        assert_eq!(created.role, Role::Client);
    }
}
