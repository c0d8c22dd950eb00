//! User management (administrators only): account list and creation dialog.

use api::{NewUser, Role, User};
use dioxus::prelude::*;
use ui::{check_access, push_toast, use_auth, use_toasts, Access, DashboardLayout, ToastLevel};

use crate::Route;

#[component]
pub fn Users() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut show_dialog = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Client);
    let mut form_error = use_signal(|| Option::<String>::None);

    // Admin-only section: a regular client is sent back to the dashboard
    // before the list is ever requested or rendered. Pending and logged-out
    // states are handled by the layout guard.
    if check_access(&auth(), true) == Access::RedirectDashboard {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let _loader = use_resource(move || async move {
        let state = auth();
        if state.loading || !state.is_admin() {
            return;
        }
        loading.set(true);
        match state.client().list_users().await {
            Ok(list) => users.set(list),
            Err(e) => {
                tracing::error!("Failed to load users: {e}");
                push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    "Não foi possível carregar os usuários.",
                );
            }
        }
        loading.set(false);
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);

            let name_value = name().trim().to_string();
            let email_value = email().trim().to_string();
            let password_value = password();

            if name_value.is_empty() {
                form_error.set(Some("Informe o nome".to_string()));
                return;
            }
            if email_value.is_empty() || !email_value.contains('@') {
                form_error.set(Some("Informe um email válido".to_string()));
                return;
            }
            if password_value.is_empty() {
                form_error.set(Some("Informe a senha".to_string()));
                return;
            }

            let new_user = NewUser {
                name: name_value,
                email: email_value,
                password: password_value,
                role: role(),
            };

            submitting.set(true);
            match auth().client().create_user(&new_user).await {
                Ok(created) => {
                    users.write().push(created);
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    role.set(Role::Client);
                    show_dialog.set(false);
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Usuário criado com sucesso!",
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to create user: {e}");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Não foi possível criar o usuário.",
                    );
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        DashboardLayout {
            div {
                class: "page-header",
                h1 { "Usuários" }
                button {
                    class: "primary",
                    onclick: move |_| show_dialog.set(true),
                    "+ Novo Usuário"
                }
            }

            if loading() {
                div { class: "screen-center", "Carregando..." }
            } else if users().is_empty() {
                div {
                    class: "empty-state",
                    h3 { "Nenhum usuário encontrado" }
                    p { "Não há usuários cadastrados no sistema." }
                }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Nome" }
                            th { "Email" }
                            th { "Tipo" }
                        }
                    }
                    tbody {
                        for user in users() {
                            tr {
                                key: "{user.id}",
                                td { "{user.name}" }
                                td { "{user.email}" }
                                td {
                                    span {
                                        class: if user.role.is_admin() { "role-badge role-admin" } else { "role-badge role-client" },
                                        "{user.role.label()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_dialog() {
                div {
                    class: "modal-overlay",
                    div {
                        class: "modal",
                        h2 { "Criar Novo Usuário" }
                        p { "Preencha os dados para criar um novo usuário no sistema." }

                        form {
                            onsubmit: handle_create,

                            if let Some(err) = form_error() {
                                div { class: "form-error", "{err}" }
                            }

                            div {
                                class: "form-field",
                                label { r#for: "user-name", "Nome" }
                                input {
                                    id: "user-name",
                                    r#type: "text",
                                    value: name(),
                                    oninput: move |evt: FormEvent| name.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "user-email", "Email" }
                                input {
                                    id: "user-email",
                                    r#type: "email",
                                    value: email(),
                                    oninput: move |evt: FormEvent| email.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "user-password", "Senha" }
                                input {
                                    id: "user-password",
                                    r#type: "password",
                                    value: password(),
                                    oninput: move |evt: FormEvent| password.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "user-role", "Tipo de Usuário" }
                                select {
                                    id: "user-role",
                                    value: role().wire_name(),
                                    onchange: move |evt| role.set(Role::from_wire_name(&evt.value())),
                                    option { value: "CLIENT", "Cliente" }
                                    option { value: "ADMIN", "Administrador" }
                                }
                            }

                            div {
                                class: "form-actions",
                                button {
                                    class: "secondary",
                                    r#type: "button",
                                    onclick: move |_| show_dialog.set(false),
                                    "Cancelar"
                                }
                                button {
                                    class: "primary",
                                    r#type: "submit",
                                    disabled: submitting(),
                                    if submitting() { "Criando..." } else { "Criar Usuário" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
