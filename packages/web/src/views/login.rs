//! Login page with the email/password form.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already authenticated: straight to the dashboard.
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Informe um email válido".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Informe a senha".to_string()));
                return;
            }

            loading.set(true);
            match ui::login(auth, &e, &p).await {
                Ok(()) => {
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::error!("Login failed: {err}");
                    loading.set(false);
                    let message = match err {
                        api::ApiError::InvalidCredentials => "Email ou senha inválidos",
                        _ => "Não foi possível entrar. Tente novamente.",
                    };
                    error.set(Some(message.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",

            h1 { "Meu Pet Club" }
            p { class: "login-subtitle", "Entre com sua conta para continuar" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Senha",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Entrando..." } else { "Entrar" }
                }
            }
        }
    }
}
