//! Dashboard chrome: sidebar navigation, user header and the section guard.

use dioxus::prelude::*;

use crate::auth::{logout, use_auth};
use crate::guard::{check_access, redirect, Access};

/// Layout for every authenticated section.
///
/// Entry is guarded: while the session restore is pending a placeholder is
/// shown, and once it resolves without a user the browser is sent to the
/// login page. The Usuários entry only appears for administrators.
#[component]
pub fn DashboardLayout(children: Element) -> Element {
    let auth_state = use_auth();
    let state = auth_state();

    match check_access(&state, false) {
        Access::Pending => {
            return rsx! {
                div { class: "screen-center", "Carregando..." }
            };
        }
        Access::RedirectLogin => {
            redirect("/login");
            return rsx! {};
        }
        Access::Allow | Access::RedirectDashboard => {}
    }

    let Some(ref user) = state.user else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "app-layout",

            div {
                class: "sidebar",
                a {
                    class: "sidebar-brand",
                    href: "/dashboard",
                    span { class: "icon", "\u{1F43E}" }
                    span { "Meu Pet Club" }
                }
                nav {
                    class: "sidebar-nav",
                    a { href: "/dashboard", "Dashboard" }
                    a { href: "/dashboard/pets", "Meus Pets" }
                    if state.is_admin() {
                        a { href: "/dashboard/users", "Usuários" }
                    }
                }
            }

            div {
                class: "main-column",
                header {
                    class: "topbar",
                    span { class: "topbar-user", "{user.name}" }
                    span { class: "topbar-role", "{user.role.label()}" }
                    button {
                        class: "secondary",
                        onclick: move |_| logout(auth_state),
                        "Sair"
                    }
                }
                main {
                    class: "page-content",
                    {children}
                }
            }
        }
    }
}
