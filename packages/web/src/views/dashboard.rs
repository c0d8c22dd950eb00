//! Overview page: record counts for the current user.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use ui::{push_toast, use_auth, use_toasts, DashboardLayout, ToastLevel};

#[derive(Debug, Clone, PartialEq)]
struct Summary {
    pets: usize,
    /// Only fetched for administrators.
    users: Option<usize>,
}

/// Counts for the overview cards. A failed listing propagates to the caller
/// instead of being coerced into a count.
async fn load_summary(client: &ApiClient, admin: bool) -> Result<Summary, ApiError> {
    let pets = client.list_pets().await?.len();
    let users = if admin {
        Some(client.list_users().await?.len())
    } else {
        None
    };
    Ok(Summary { pets, users })
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut summary = use_signal(|| Option::<Summary>::None);
    let mut failed = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let state = auth();
        if state.loading || state.user.is_none() {
            return;
        }
        failed.set(false);
        match load_summary(&state.client(), state.is_admin()).await {
            Ok(counts) => summary.set(Some(counts)),
            Err(e) => {
                tracing::error!("Failed to load dashboard summary: {e}");
                push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    "Não foi possível carregar o resumo.",
                );
                failed.set(true);
            }
        }
    });

    let state = auth();
    let name = state
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    rsx! {
        DashboardLayout {
            div {
                class: "page-header",
                h1 { "Dashboard" }
            }
            p { class: "page-subtitle", "Bem-vindo, {name}! Aqui está um resumo do seu sistema." }

            if failed() {
                div {
                    class: "empty-state",
                    h3 { "Resumo indisponível" }
                    p { "Não foi possível carregar os dados. Tente novamente mais tarde." }
                }
            } else if let Some(counts) = summary() {
                div {
                    class: "card-grid",
                    div {
                        class: "card",
                        div { class: "card-title", "Total de Pets" }
                        div { class: "card-value", "{counts.pets}" }
                        p { class: "card-hint", "Pets cadastrados no sistema" }
                    }
                    if let Some(total) = counts.users {
                        div {
                            class: "card",
                            div { class: "card-title", "Total de Usuários" }
                            div { class: "card-value", "{total}" }
                            p { class: "card-hint", "Usuários cadastrados no sistema" }
                        }
                    }
                }
            } else {
                div { class: "screen-center", "Carregando..." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pet_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "name": "Rex",
            "species": "Dog",
            "breed": "Labrador",
            "age": 3,
            "weight": 25.5,
            "description": "",
            "owner": "u1",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        })
    }

    fn user_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "name": "Ana",
            "email": "ana@example.com",
            "role": "ADMIN"
        })
    }

    #[tokio::test]
    async fn failed_pet_listing_propagates_instead_of_counting_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pets"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::with_base_url(server.uri(), None);
        let err = load_summary(&client, false).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { op: "list pets", .. }));
    }

    #[tokio::test]
    async fn failed_user_listing_propagates_for_admins() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::with_base_url(server.uri(), None);
        let err = load_summary(&client, true).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { op: "list users", .. }));
    }

    #[tokio::test]
    async fn admin_summary_includes_the_user_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pets"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([pet_json("p1"), pet_json("p2")])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([user_json("u1")])),
            )
            .mount(&server)
            .await;

        let client = ApiClient::with_base_url(server.uri(), None);
        let summary = load_summary(&client, true).await.unwrap();
        assert_eq!(summary.pets, 2);
        assert_eq!(summary.users, Some(1));
    }

    #[tokio::test]
    async fn client_summary_skips_the_user_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pets"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([pet_json("p1")])),
            )
            .mount(&server)
            .await;

        let client = ApiClient::with_base_url(server.uri(), None);
        let summary = load_summary(&client, false).await.unwrap();
        assert_eq!(summary.pets, 1);
        assert_eq!(summary.users, None);
    }
}
