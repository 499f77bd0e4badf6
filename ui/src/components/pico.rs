//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
/// Wraps children in a `<div class="grid">`.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct AccordionProps {
    title: String,
    children: Element,
}

/// An accordion for showing/hiding content, using the <details> element.
pub fn Accordion(props: AccordionProps) -> Element {
    rsx! {
        details {
            summary { role: "button", "{props.title}" }
            {props.children}
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Danger,
    Submit,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Shows the Pico busy spinner while a submission is in flight.
    #[props(default = false)]
    busy: bool,
}

/// A versatile button component. `Submit` buttons post the surrounding form;
/// the other variants act through `on_click`.
pub fn Button(props: ButtonProps) -> Element {
    let base = match props.button_type {
        ButtonType::Primary => "",
        ButtonType::Danger => "danger",
        ButtonType::Submit => "submit-button",
    };
    let class_str = if props.outline {
        match props.button_type {
            ButtonType::Primary => "outline",
            ButtonType::Danger => "outline danger",
            ButtonType::Submit => "outline submit-button",
        }
    } else {
        base
    };
    let kind = match props.button_type {
        ButtonType::Submit => "submit",
        _ => "button",
    };
    rsx! {
        button {
            r#type: kind,
            class: "{class_str}",
            disabled: props.disabled,
            aria_busy: props.busy,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default)]
    value: String,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A labeled, controlled form input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                value: "{props.value}",
                required: props.required,
                disabled: props.disabled,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SelectProps {
    label: String,
    name: String,
    /// (value, label) pairs rendered as the options.
    options: Vec<(String, String)>,
    #[props(default)]
    value: String,
    /// Rendered as a first, empty-valued option.
    #[props(optional)]
    placeholder: Option<String>,
    #[props(optional)]
    on_change: Option<EventHandler<FormEvent>>,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A labeled, controlled dropdown.
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            select {
                name: "{props.name}",
                value: "{props.value}",
                required: props.required,
                disabled: props.disabled,
                onchange: move |evt| {
                    if let Some(handler) = &props.on_change {
                        handler.call(evt);
                    }
                },
                if let Some(placeholder) = props.placeholder.as_deref() {
                    option { value: "", selected: props.value.is_empty(), "{placeholder}" }
                }
                for (option_value, option_label) in props.options.iter() {
                    option {
                        value: "{option_value}",
                        selected: *option_value == props.value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaProps {
    label: String,
    name: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default)]
    value: String,
    #[props(default = 4)]
    rows: u32,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A labeled, controlled multi-line text field.
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            textarea {
                name: "{props.name}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                value: "{props.value}",
                rows: "{props.rows}",
                required: props.required,
                disabled: props.disabled,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}
