use dioxus::prelude::*;

/// Labelled single-line input bound to a string signal.
#[component]
pub fn TextInput(
    label: &'static str,
    mut value: Signal<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] required: bool,
    #[props(default)] placeholder: Option<&'static str>,
) -> Element {
    rsx!(label {
        class: "field",
        span { class: "field-label", "{label}" }
        input {
            class: "input",
            r#type: input_type,
            required,
            placeholder: placeholder.unwrap_or_default(),
            value: "{value}",
            oninput: move |e| value.set(e.value()),
        }
    })
}

/// Labelled multi-line input bound to a string signal.
#[component]
pub fn TextArea(
    label: &'static str,
    mut value: Signal<String>,
    #[props(default)] required: bool,
) -> Element {
    rsx!(label {
        class: "field",
        span { class: "field-label", "{label}" }
        textarea {
            class: "textarea",
            required,
            rows: 4,
            value: "{value}",
            oninput: move |e| value.set(e.value()),
        }
    })
}

#[component]
pub fn FormError(message: Option<String>) -> Element {
    rsx!(if let Some(message) = message {
        p { class: "form-error", "{message}" }
    })
}

/// Converts a form value to an optional field, treating blank input as absent.
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parses a numeric form value, treating blank or invalid input as absent.
pub fn optional_number(value: String) -> Option<i32> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_absent() {
        assert_eq!(optional("   ".to_string()), None);
        assert_eq!(optional(" Forces 2 ".to_string()), Some("Forces 2".to_string()));
    }

    #[test]
    fn non_numeric_input_is_absent() {
        assert_eq!(optional_number("3".to_string()), Some(3));
        assert_eq!(optional_number("three".to_string()), None);
        assert_eq!(optional_number(String::new()), None);
    }
}
