//! Shared UI building blocks for the Meu Pet Club dashboard.

mod auth;
pub use auth::{login, logout, use_auth, AuthProvider, AuthState};

mod guard;
pub use guard::{check_access, redirect, Access};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod layout;
pub use layout::DashboardLayout;
