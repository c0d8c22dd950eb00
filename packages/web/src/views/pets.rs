//! Pet list: table with edit navigation and delete confirmation.

use api::Pet;
use dioxus::prelude::*;
use ui::{push_toast, use_auth, use_toasts, DashboardLayout, ToastLevel};

use crate::Route;

#[component]
pub fn Pets() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut pets = use_signal(Vec::<Pet>::new);
    let mut loading = use_signal(|| true);
    let mut pet_to_delete = use_signal(|| Option::<Pet>::None);

    let _loader = use_resource(move || async move {
        let state = auth();
        if state.loading || state.user.is_none() {
            return;
        }
        loading.set(true);
        match state.client().list_pets().await {
            Ok(list) => pets.set(list),
            Err(e) => {
                tracing::error!("Failed to load pets: {e}");
                push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    "Não foi possível carregar os pets.",
                );
            }
        }
        loading.set(false);
    });

    let handle_delete = move |_| {
        let Some(pet) = pet_to_delete() else { return };
        spawn(async move {
            match auth().client().delete_pet(&pet.id).await {
                Ok(_) => {
                    pets.write().retain(|p| p.id != pet.id);
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Pet excluído com sucesso.",
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to delete pet {}: {e}", pet.id);
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Não foi possível excluir o pet.",
                    );
                }
            }
            pet_to_delete.set(None);
        });
    };

    rsx! {
        DashboardLayout {
            div {
                class: "page-header",
                h1 { "Meus Pets" }
                button {
                    class: "primary",
                    onclick: move |_| { nav.push(Route::PetNew {}); },
                    "+ Novo Pet"
                }
            }

            if loading() {
                div { class: "screen-center", "Carregando..." }
            } else if pets().is_empty() {
                div {
                    class: "empty-state",
                    h3 { "Nenhum pet cadastrado" }
                    p { "Você ainda não possui pets cadastrados no sistema." }
                    button {
                        class: "primary",
                        onclick: move |_| { nav.push(Route::PetNew {}); },
                        "+ Cadastrar Pet"
                    }
                }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Nome" }
                            th { "Espécie" }
                            th { "Raça" }
                            th { "Idade" }
                            th { "Peso (kg)" }
                            th { "Dono" }
                            th { class: "actions-col", "Ações" }
                        }
                    }
                    tbody {
                        for pet in pets() {
                            tr {
                                key: "{pet.id}",
                                td { "{pet.name}" }
                                td { "{pet.species}" }
                                td { "{pet.breed}" }
                                td { "{pet.age}" }
                                td { "{pet.weight}" }
                                td { {pet.owner.display_name().unwrap_or("N/A")} }
                                td {
                                    class: "actions-col",
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let id = pet.id.clone();
                                            move |_| { nav.push(Route::PetDetail { id: id.clone() }); }
                                        },
                                        "Editar"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let pet = pet.clone();
                                            move |_| pet_to_delete.set(Some(pet.clone()))
                                        },
                                        "Excluir"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(pet) = pet_to_delete() {
                div {
                    class: "modal-overlay",
                    div {
                        class: "modal",
                        h2 { "Confirmar exclusão" }
                        p { "Tem certeza que deseja excluir o pet {pet.name}? Esta ação não pode ser desfeita." }
                        div {
                            class: "form-actions",
                            button {
                                class: "secondary",
                                onclick: move |_| pet_to_delete.set(None),
                                "Cancelar"
                            }
                            button {
                                class: "danger",
                                onclick: handle_delete,
                                "Excluir"
                            }
                        }
                    }
                }
            }
        }
    }
}
