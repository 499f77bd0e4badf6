// File: src/screens/register.rs
use api::types::Registration;
use api::{BloodGroup, Client};
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::pico::{Button, ButtonType, Card, Input, Select};
use crate::hooks::use_toast::use_toast;
use crate::Route;

#[allow(non_snake_case)]
#[component]
pub fn RegisterScreen() -> Element {
    let client = use_context::<Client>();
    let mut toast = use_toast();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut blood_group = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut state = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let Ok(group) = blood_group.peek().parse::<BloodGroup>() else {
            toast.error("Please select your blood group");
            return;
        };
        let registration = Registration {
            username: username.peek().clone(),
            password: password.peek().clone(),
            blood_group: group,
            city: city.peek().clone(),
            state: state.peek().clone(),
        };

        is_submitting.set(true);
        let client = client.clone();
        spawn(async move {
            match client.register(&registration).await {
                Ok(()) => {
                    toast.success("Registration successful! Please log in.");
                    navigator.push(Route::LoginScreen {});
                }
                Err(error) => match error.server_message() {
                    Some(message) => toast.error(message.to_string()),
                    None => toast.error("Registration failed. Please try again."),
                },
            }
            is_submitting.set(false);
        });
    };

    let group_options: Vec<(String, String)> = BloodGroup::iter()
        .map(|group| (group.code().to_string(), group.code().to_string()))
        .collect();

    rsx! {
        div {
            class: "narrow",
            Card {
                h2 { class: "page-title", "Become a Donor" }
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
                    Select {
                        label: "Blood Group*",
                        name: "bloodGroup",
                        options: group_options,
                        value: blood_group(),
                        placeholder: "Select Blood Group",
                        required: true,
                        disabled: is_submitting(),
                        on_change: move |event: FormEvent| blood_group.set(event.value()),
                    }
                    Input {
                        label: "City*",
                        name: "city",
                        value: city(),
                        required: true,
                        disabled: is_submitting(),
                        on_input: move |event: FormEvent| city.set(event.value()),
                    }
                    Input {
                        label: "State",
                        name: "state",
                        value: state(),
                        disabled: is_submitting(),
                        on_input: move |event: FormEvent| state.set(event.value()),
                    }
                    Button {
                        button_type: ButtonType::Submit,
                        disabled: is_submitting(),
                        busy: is_submitting(),
                        if is_submitting() { "Creating account..." } else { "Register" }
                    }
                }
                p {
                    class: "muted",
                    "Already registered? "
                    Link { to: Route::LoginScreen {}, "Log in" }
                }
            }
        }
    }
}
