// File: src/components/require_login.rs
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::hooks::use_session::use_session;
use crate::hooks::use_toast::use_toast;
use crate::Route;

#[derive(PartialEq, Clone, Props)]
pub struct RequireLoginProps {
    /// Toast shown while bouncing a signed-out visitor to the login form.
    #[props(default = "Please log in to continue".to_string())]
    message: String,
    children: Element,
}

/// Gates a screen behind an active session.
///
/// Signed-out visitors are redirected to the login form and the children are
/// never mounted, so a gated screen issues no requests for them.
#[component]
pub fn RequireLogin(props: RequireLoginProps) -> Element {
    let session = use_session();
    let mut toast = use_toast();
    let navigator = use_navigator();

    let message = props.message.clone();
    use_effect(move || {
        if !session.is_logged_in() {
            toast.error(message.clone());
            navigator.push(Route::LoginScreen {});
        }
    });

    if !session.is_logged_in() {
        return rsx! {
            Card {
                p { "Redirecting to login..." }
            }
        };
    }

    rsx! {
        {props.children}
    }
}
