use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaStar, Icon};

use crate::{
    client::{
        component::{page::LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::resource::ResourceDto,
};

#[cfg(feature = "web")]
use crate::client::api::resource::get_resources;

#[component]
pub fn Resources() -> Element {
    #[allow(unused_mut)]
    let mut resources = use_signal(|| None::<Result<Vec<ResourceDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_resources);

        use_effect(move || resources.set(future.cloned()));
    }

    rsx! {
        Title { "Resources | {SITE_NAME}" }
        Page {
            class: "catalogue",
            h1 { class: "page-title", "Resources" }
            match resources() {
                None => rsx! { LoadingPage {} },
                Some(Err(err)) => rsx! { p { class: "form-error", "{err}" } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "empty", "No resources yet." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "card-grid",
                        for resource in list {
                            ResourceCard { key: "{resource.id}", resource }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ResourceCard(resource: ResourceDto) -> Element {
    rsx!(article {
        class: if resource.featured { "card card-featured" } else { "card" },
        if let Some(image_url) = &resource.image_url {
            img { class: "card-image", src: "{image_url}", alt: "{resource.name}" }
        }
        h2 {
            class: "card-title",
            if resource.featured {
                Icon { width: 14, height: 14, icon: FaStar }
            }
            a {
                href: "{resource.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{resource.name}"
            }
        }
        p {
            class: "card-meta",
            "{resource.resource_type} · {resource.category}"
        }
        if let Some(author) = &resource.author {
            p { class: "card-meta", "by {author}" }
        }
        p { "{resource.description}" }
    })
}
