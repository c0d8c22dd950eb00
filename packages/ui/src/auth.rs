//! Authentication context and session lifecycle.
//!
//! [`AuthProvider`] is the single source of truth for the authenticated
//! identity and its bearer token: consumers read through [`use_auth`], and
//! only the two mutators here — [`login`] and [`logout`] — ever change the
//! state. No other component caches or forks session state.

use api::{ApiClient, ApiError, Role, SessionRecord};
use dioxus::prelude::*;

/// Authentication state for the application.
///
/// Outside the initial loading phase, `token` and `user` are either both
/// present or both absent.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<api::User>,
    pub token: Option<String>,
    /// True while the persisted session is still being restored at startup.
    /// Dependent views must not redirect or render as logged out yet.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// API client carrying the current bearer token.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.token.clone())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component once, near the root.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore the persisted session on mount.
    let _ = use_resource(move || async move {
        let state = match api::session::load() {
            Some(SessionRecord { token, user }) => AuthState {
                user: Some(user),
                token: Some(token),
                loading: false,
            },
            None => AuthState {
                user: None,
                token: None,
                loading: false,
            },
        };
        auth_state.set(state);
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Exchange credentials for a session. On success the record is persisted
/// and the shared state updated; on failure the state is left untouched and
/// the error returned to the caller.
pub async fn login(
    mut auth_state: Signal<AuthState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let record = ApiClient::new(None).login(email, password).await?;
    api::session::save(&record);
    auth_state.set(AuthState {
        user: Some(record.user),
        token: Some(record.token),
        loading: false,
    });
    Ok(())
}

/// Clear the session from memory and durable storage, then return to the
/// login page.
pub fn logout(mut auth_state: Signal<AuthState>) {
    api::session::clear();
    auth_state.set(AuthState {
        user: None,
        token: None,
        loading: false,
    });
    crate::guard::redirect("/login");
}
