//! Shared pet form, used by both the create and the edit page.

use api::PetDraft;
use dioxus::prelude::*;

/// Form over the editable pet field set. Validation happens here, before any
/// network call; `on_submit` only fires with a well-formed draft.
#[component]
pub fn PetForm(
    initial: PetDraft,
    submit_label: String,
    saving: bool,
    on_submit: EventHandler<PetDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal(|| initial.name.clone());
    let mut species = use_signal(|| initial.species.clone());
    let mut breed = use_signal(|| initial.breed.clone());
    let mut age = use_signal(|| initial.age.to_string());
    let mut weight = use_signal(|| initial.weight.to_string());
    let mut description = use_signal(|| initial.description.clone());
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let name_value = name().trim().to_string();
        let species_value = species().trim().to_string();
        let breed_value = breed().trim().to_string();

        if name_value.is_empty() || species_value.is_empty() || breed_value.is_empty() {
            error.set(Some("Preencha nome, espécie e raça.".to_string()));
            return;
        }
        let Ok(age_value) = age().trim().parse::<u32>() else {
            error.set(Some("Idade deve ser um número inteiro não negativo.".to_string()));
            return;
        };
        let Ok(weight_value) = weight().trim().parse::<f64>() else {
            error.set(Some("Peso deve ser um número.".to_string()));
            return;
        };
        if weight_value < 0.0 {
            error.set(Some("Peso não pode ser negativo.".to_string()));
            return;
        }

        on_submit.call(PetDraft {
            name: name_value,
            species: species_value,
            breed: breed_value,
            age: age_value,
            weight: weight_value,
            description: description(),
        });
    };

    rsx! {
        form {
            class: "pet-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "pet-name", "Nome" }
                    input {
                        id: "pet-name",
                        r#type: "text",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "pet-species", "Espécie" }
                    input {
                        id: "pet-species",
                        r#type: "text",
                        value: species(),
                        oninput: move |evt: FormEvent| species.set(evt.value()),
                    }
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "pet-breed", "Raça" }
                    input {
                        id: "pet-breed",
                        r#type: "text",
                        value: breed(),
                        oninput: move |evt: FormEvent| breed.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "pet-age", "Idade (anos)" }
                    input {
                        id: "pet-age",
                        r#type: "number",
                        min: "0",
                        value: age(),
                        oninput: move |evt: FormEvent| age.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "pet-weight", "Peso (kg)" }
                    input {
                        id: "pet-weight",
                        r#type: "number",
                        min: "0",
                        step: "0.1",
                        value: weight(),
                        oninput: move |evt: FormEvent| weight.set(evt.value()),
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "pet-description", "Descrição" }
                textarea {
                    id: "pet-description",
                    rows: "3",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancelar"
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving,
                    if saving { "Salvando..." } else { "{submit_label}" }
                }
            }
        }
    }
}
