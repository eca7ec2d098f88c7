use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaTrash, Icon};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            form::{optional, optional_number},
            page::LoadingPage,
            FormError, Page, TextInput,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::character::{CharacterDto, CreateCharacterDto},
};

#[cfg(feature = "web")]
use crate::client::api::character::{create_character, delete_character, get_characters};

#[component]
pub fn Characters() -> Element {
    #[allow(unused_mut)]
    let mut refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut characters = use_signal(|| None::<Result<Vec<CharacterDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_characters().await
        });

        use_effect(move || characters.set(future.cloned()));
    }

    rsx! {
        Title { "Characters | {SITE_NAME}" }
        Page {
            class: "catalogue",
            h1 { class: "page-title", "Your characters" }
            match characters() {
                None => rsx! { LoadingPage {} },
                Some(Err(err)) => rsx! { p { class: "form-error", "{err}" } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "empty", "You haven't created any characters yet." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "card-grid",
                        for character in list {
                            CharacterCard { key: "{character.id}", character, refetch_trigger }
                        }
                    }
                },
            }
            CreateCharacterForm { refetch_trigger }
        }
    }
}

#[component]
fn CharacterCard(character: CharacterDto, mut refetch_trigger: Signal<u32>) -> Element {
    let mut deleting = use_signal(|| false);
    #[allow(unused_variables)]
    let id = character.id;

    let on_delete = move |_| {
        deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_character(id).await {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => tracing::error!("Failed to delete character {}: {}", id, err),
            }
            deleting.set(false);
        });
    };

    let created = character.created_at.format("%Y-%m-%d").to_string();

    rsx!(article {
        class: "card",
        div {
            class: "card-header",
            h2 { class: "card-title", "{character.name}" }
            button {
                class: "btn btn-icon",
                title: "Delete character",
                disabled: deleting(),
                onclick: on_delete,
                Icon { width: 14, height: 14, icon: FaTrash }
            }
        }
        p {
            class: "card-meta",
            "{character.tradition} · Arete {character.arete}"
        }
        if let Some(concept) = &character.concept {
            p { "{concept}" }
        }
        dl {
            class: "traits",
            if let Some(essence) = &character.essence {
                dt { "Essence" }
                dd { "{essence}" }
            }
            if let Some(nature) = &character.nature {
                dt { "Nature" }
                dd { "{nature}" }
            }
            if let Some(demeanor) = &character.demeanor {
                dt { "Demeanor" }
                dd { "{demeanor}" }
            }
        }
        p { class: "card-meta", "Created {created}" }
    })
}

#[component]
fn CreateCharacterForm(mut refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut tradition = use_signal(String::new);
    let mut concept = use_signal(String::new);
    let mut essence = use_signal(String::new);
    let mut nature = use_signal(String::new);
    let mut demeanor = use_signal(String::new);
    let mut arete = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let payload = CreateCharacterDto {
            name: optional(name()),
            tradition: optional(tradition()),
            concept: optional(concept()),
            essence: optional(essence()),
            nature: optional(nature()),
            demeanor: optional(demeanor()),
            arete: optional_number(arete()),
        };

        error.set(None);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_character(payload).await {
                Ok(_) => {
                    for mut field in [name, tradition, concept, essence, nature, demeanor, arete] {
                        field.set(String::new());
                    }
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to create character: {}", err);
                    error.set(Some(err.message));
                }
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx!(form {
        class: "form card",
        onsubmit: on_submit,
        h2 { class: "card-title", "New character" }
        TextInput { label: "Name", value: name, required: true }
        TextInput { label: "Tradition", value: tradition, required: true }
        TextInput { label: "Concept", value: concept }
        TextInput { label: "Essence", value: essence }
        TextInput { label: "Nature", value: nature }
        TextInput { label: "Demeanor", value: demeanor }
        TextInput { label: "Arete", value: arete, input_type: "number", placeholder: "1" }
        FormError { message: error() }
        button {
            class: "btn",
            r#type: "submit",
            disabled: submitting(),
            if submitting() { "Saving..." } else { "Create character" }
        }
    })
}
