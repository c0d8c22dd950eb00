//! Pet edit page: loads the record, then submits a full-replace update.

use api::PetDraft;
use dioxus::prelude::*;
use ui::{push_toast, use_auth, use_toasts, DashboardLayout, ToastLevel};

use super::pet_form::PetForm;
use crate::Route;

#[component]
pub fn PetDetail(id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut draft = use_signal(|| Option::<PetDraft>::None);
    let mut saving = use_signal(|| false);

    let load_id = id.clone();
    let _loader = use_resource(move || {
        let id = load_id.clone();
        async move {
            let state = auth();
            if state.loading || state.user.is_none() {
                return;
            }
            match state.client().get_pet(&id).await {
                Ok(pet) => draft.set(Some(pet.draft())),
                Err(e) => {
                    tracing::error!("Failed to load pet {id}: {e}");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Não foi possível carregar os dados do pet.",
                    );
                    nav.push(Route::Pets {});
                }
            }
        }
    });

    let update_id = id.clone();
    let handle_submit = move |edited: PetDraft| {
        let id = update_id.clone();
        saving.set(true);
        spawn(async move {
            match auth().client().update_pet(&id, &edited).await {
                Ok(_) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Pet atualizado com sucesso!",
                    );
                    nav.push(Route::Pets {});
                }
                Err(e) => {
                    tracing::error!("Failed to update pet {id}: {e}");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Não foi possível atualizar o pet.",
                    );
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        DashboardLayout {
            div {
                class: "page-header",
                h1 { "Editar Pet" }
            }
            if let Some(initial) = draft() {
                PetForm {
                    initial,
                    submit_label: "Salvar",
                    saving: saving(),
                    on_submit: handle_submit,
                    on_cancel: move |_| { nav.push(Route::Pets {}); },
                }
            } else {
                div { class: "screen-center", "Carregando..." }
            }
        }
    }
}
