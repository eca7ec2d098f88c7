use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            form::{optional, optional_number},
            page::LoadingPage,
            FormError, Page, TextArea, TextInput,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::rote::{CreateRoteDto, RoteDto},
};

#[cfg(feature = "web")]
use crate::client::api::rote::{create_rote, get_rotes};

#[component]
pub fn Home() -> Element {
    let mut tradition_filter = use_signal(String::new);
    let mut sphere_filter = use_signal(String::new);
    #[allow(unused_mut)]
    let mut refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut rotes = use_signal(|| None::<Result<Vec<RoteDto>, ApiError>>);

    // Refetch whenever a filter changes or a rote is added
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_rotes(Some(tradition_filter()), Some(sphere_filter())).await
        });

        use_effect(move || {
            if let Some(Err(err)) = &*future.read_unchecked() {
                tracing::error!("Failed to fetch rotes: {}", err);
            }
            rotes.set(future.cloned());
        });
    }

    rsx! {
        Title { "Rotes | {SITE_NAME}" }
        Page {
            class: "catalogue",
            h1 { class: "page-title", "Rotes" }
            div {
                class: "filters",
                input {
                    class: "input",
                    placeholder: "Filter by tradition",
                    value: "{tradition_filter}",
                    oninput: move |e| tradition_filter.set(e.value()),
                }
                input {
                    class: "input",
                    placeholder: "Filter by sphere",
                    value: "{sphere_filter}",
                    oninput: move |e| sphere_filter.set(e.value()),
                }
            }
            match rotes() {
                None => rsx! { LoadingPage {} },
                Some(Err(err)) => rsx! { p { class: "form-error", "{err}" } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "empty", "No rotes found." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "card-grid",
                        for rote in list {
                            RoteCard { key: "{rote.id}", rote }
                        }
                    }
                },
            }
            CreateRoteForm { refetch_trigger }
        }
    }
}

#[component]
fn RoteCard(rote: RoteDto) -> Element {
    rsx!(article {
        class: "card",
        h2 { class: "card-title", "{rote.name}" }
        p {
            class: "card-meta",
            "{rote.tradition} · {rote.spheres} · Level {rote.level}"
        }
        p { "{rote.description}" }
        if let Some(page) = &rote.page {
            p { class: "card-meta", "{page}" }
        }
    })
}

#[component]
fn CreateRoteForm(mut refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut tradition = use_signal(String::new);
    let mut spheres = use_signal(String::new);
    let mut level = use_signal(String::new);
    let mut page = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let payload = CreateRoteDto {
            name: optional(name()),
            tradition: optional(tradition()),
            description: optional(description()),
            spheres: optional(spheres()),
            level: optional_number(level()),
            page: optional(page()),
        };

        if payload.level.is_none() {
            error.set(Some("Level must be a number".to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_rote(payload).await {
                Ok(_) => {
                    for mut field in [name, tradition, spheres, level, page, description] {
                        field.set(String::new());
                    }
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to create rote: {}", err);
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
        h2 { class: "card-title", "Add a rote" }
        TextInput { label: "Name", value: name, required: true }
        TextInput { label: "Tradition", value: tradition, required: true }
        TextInput {
            label: "Spheres",
            value: spheres,
            required: true,
            placeholder: "Forces 2, Prime 1",
        }
        TextInput { label: "Level", value: level, input_type: "number", required: true }
        TextInput { label: "Page", value: page }
        TextArea { label: "Description", value: description, required: true }
        FormError { message: error() }
        button {
            class: "btn",
            r#type: "submit",
            disabled: submitting(),
            if submitting() { "Saving..." } else { "Add rote" }
        }
    })
}
