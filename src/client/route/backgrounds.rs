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
    model::background::{BackgroundDto, CreateBackgroundDto},
};

#[cfg(feature = "web")]
use crate::client::api::background::{create_background, get_backgrounds};

#[component]
pub fn Backgrounds() -> Element {
    #[allow(unused_mut)]
    let mut refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut backgrounds = use_signal(|| None::<Result<Vec<BackgroundDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_backgrounds().await
        });

        use_effect(move || backgrounds.set(future.cloned()));
    }

    rsx! {
        Title { "Backgrounds | {SITE_NAME}" }
        Page {
            class: "catalogue",
            h1 { class: "page-title", "Backgrounds" }
            match backgrounds() {
                None => rsx! { LoadingPage {} },
                Some(Err(err)) => rsx! { p { class: "form-error", "{err}" } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "empty", "No backgrounds yet." }
                },
                Some(Ok(list)) => rsx! {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Category" }
                                th { "Type" }
                                th { "Cost" }
                                th { "Description" }
                            }
                        }
                        tbody {
                            for background in list {
                                tr {
                                    key: "{background.id}",
                                    td { "{background.name}" }
                                    td { "{background.category}" }
                                    td { "{background.subtype}" }
                                    td { "{background.cost}" }
                                    td { "{background.description}" }
                                }
                            }
                        }
                    }
                },
            }
            CreateBackgroundForm { refetch_trigger }
        }
    }
}

#[component]
fn CreateBackgroundForm(mut refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut subtype = use_signal(String::new);
    let mut cost = use_signal(String::new);
    let mut page = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let payload = CreateBackgroundDto {
            name: optional(name()),
            category: optional(category()),
            subtype: optional(subtype()),
            cost: optional_number(cost()),
            description: optional(description()),
            page: optional(page()),
        };

        if payload.cost.is_none() {
            error.set(Some("Cost must be a number".to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_background(payload).await {
                Ok(_) => {
                    for mut field in [name, category, subtype, cost, page, description] {
                        field.set(String::new());
                    }
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to create background: {}", err);
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
        h2 { class: "card-title", "Add a background" }
        TextInput { label: "Name", value: name, required: true }
        TextInput { label: "Category", value: category, required: true }
        TextInput { label: "Type", value: subtype, required: true }
        TextInput { label: "Cost", value: cost, input_type: "number", required: true }
        TextInput { label: "Page", value: page }
        TextArea { label: "Description", value: description, required: true }
        FormError { message: error() }
        button {
            class: "btn",
            r#type: "submit",
            disabled: submitting(),
            if submitting() { "Saving..." } else { "Add background" }
        }
    })
}
