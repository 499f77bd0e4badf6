// File: src/components/toast.rs
use dioxus::prelude::*;

use crate::hooks::use_toast::use_toast;

#[derive(Debug, Clone, Copy, PartialEq, strum::EnumIs)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn to_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

/// One entry in the notification stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Fixed overlay rendering the active toasts. Mounted once by the root
/// layout so it survives navigation.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toast();
    let active = toasts.active();

    rsx! {
        div {
            class: "toast-stack",
            for toast in active {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

/// One rendered toast; clicking it dismisses it early.
#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toasts = use_toast();
    let id = toast.id;

    rsx! {
        article {
            class: "toast {toast.kind.to_class()}",
            role: "alert",
            onclick: move |_| toasts.dismiss(id),
            "{toast.message}"
        }
    }
}
