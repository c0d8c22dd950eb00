//! Route-entry access checks.
//!
//! Authorization is decided before a section renders, as a plain function of
//! the current [`AuthState`]; the caller then acts on the verdict (render,
//! wait, or navigate away). This keeps the decision independent of the
//! rendering framework and testable natively.

use api::Role;

use crate::auth::AuthState;

/// Verdict for entering a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session restore still in flight; render a placeholder, do not redirect.
    Pending,
    Allow,
    /// Not authenticated; go to the login entry point.
    RedirectLogin,
    /// Authenticated but lacking the required role; go to the default section.
    RedirectDashboard,
}

pub fn check_access(auth: &AuthState, admin_only: bool) -> Access {
    if auth.loading {
        return Access::Pending;
    }
    match &auth.user {
        None => Access::RedirectLogin,
        Some(user) if admin_only && user.role != Role::Admin => Access::RedirectDashboard,
        Some(_) => Access::Allow,
    }
}

/// Navigate the browser to `path`. No-op outside the browser.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to {path} skipped outside the browser");
    }
}
