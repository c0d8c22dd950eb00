//! Pet creation page.

use api::PetDraft;
use dioxus::prelude::*;
use ui::{push_toast, use_auth, use_toasts, DashboardLayout, ToastLevel};

use super::pet_form::PetForm;
use crate::Route;

#[component]
pub fn PetNew() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut saving = use_signal(|| false);

    let handle_submit = move |draft: PetDraft| {
        saving.set(true);
        spawn(async move {
            match auth().client().create_pet(&draft).await {
                Ok(_) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Pet cadastrado com sucesso!",
                    );
                    nav.push(Route::Pets {});
                }
                Err(e) => {
                    tracing::error!("Failed to create pet: {e}");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Não foi possível cadastrar o pet.",
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
                h1 { "Novo Pet" }
            }
            PetForm {
                initial: PetDraft::default(),
                submit_label: "Cadastrar",
                saving: saving(),
                on_submit: handle_submit,
                on_cancel: move |_| { nav.push(Route::Pets {}); },
            }
        }
    }
}
