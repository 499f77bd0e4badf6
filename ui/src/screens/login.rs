// File: src/screens/login.rs
use api::types::Credentials;
use api::Client;
use dioxus::prelude::*;

use crate::components::pico::{Button, ButtonType, Card, Input};
use crate::hooks::use_session::use_session;
use crate::hooks::use_toast::use_toast;
use crate::Route;

#[allow(non_snake_case)]
#[component]
pub fn LoginScreen() -> Element {
    let client = use_context::<Client>();
    let mut session = use_session();
    let mut toast = use_toast();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let credentials = Credentials {
            username: username.peek().clone(),
            password: password.peek().clone(),
        };

        is_submitting.set(true);
        let client = client.clone();
        spawn(async move {
            match client.log_in(&credentials).await {
                Ok(auth) => {
                    session.log_in(auth);
                    toast.success("Welcome back!");
                    navigator.push(Route::HomeScreen {});
                }
                Err(error) => match error.server_message() {
                    Some(message) => toast.error(message.to_string()),
                    None => toast.error("Login failed. Please try again."),
                },
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "narrow",
            Card {
                h2 { class: "page-title", "Login" }
                form {
                    onsubmit: submit,
                    Input {
                        label: "Username*",
                        name: "username",
                        value: username(),
                        required: true,
                        disabled: is_submitting(),
                        on_input: move |event: FormEvent| username.set(event.value()),
                    }
                    Input {
                        label: "Password*",
                        name: "password",
                        input_type: "password",
                        value: password(),
                        required: true,
                        disabled: is_submitting(),
                        on_input: move |event: FormEvent| password.set(event.value()),
                    }
                    Button {
                        button_type: ButtonType::Submit,
                        disabled: is_submitting(),
                        busy: is_submitting(),
                        if is_submitting() { "Logging in..." } else { "Login" }
                    }
                }
                p {
                    class: "muted",
                    "New donor? "
                    Link { to: Route::RegisterScreen {}, "Create an account" }
                }
            }
        }
    }
}
