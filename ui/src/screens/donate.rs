// File: src/screens/donate.rs
use api::types::AppointmentDraft;
use api::Client;
use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::pico::{Button, ButtonType, Card, Input};
use crate::components::require_login::RequireLogin;
use crate::hooks::use_toast::use_toast;
use crate::Route;

#[allow(non_snake_case)]
#[component]
pub fn DonateScreen() -> Element {
    rsx! {
        RequireLogin {
            message: "Please log in to schedule a donation",
            AppointmentForm {}
        }
    }
}

#[component]
fn AppointmentForm() -> Element {
    let client = use_context::<Client>();
    let mut toast = use_toast();
    let navigator = use_navigator();

    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut center = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        // Date inputs emit ISO dates; anything else never reaches here.
        let Ok(parsed_date) = date.peek().parse::<NaiveDate>() else {
            toast.error("Please pick a valid date");
            return;
        };
        let draft = AppointmentDraft {
            date: parsed_date,
            time: time.peek().clone(),
            center: center.peek().clone(),
            address: address.peek().clone(),
        };

        is_submitting.set(true);
        let client = client.clone();
        spawn(async move {
            match client.schedule_appointment(&draft).await {
                Ok(appointment) => {
                    toast.success(format!(
                        "Appointment scheduled at {} for {}",
                        appointment.center,
                        appointment.date.format("%B %-d, %Y"),
                    ));
                    navigator.push(Route::MyDonationsScreen {});
                }
                Err(error) => match error.server_message() {
                    Some(message) => toast.error(message.to_string()),
                    None => toast.error("Could not schedule the appointment. Please try again."),
                },
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "narrow",
            Card {
                h2 { class: "page-title", "Schedule a Donation" }
                p {
                    class: "muted",
                    "Pick a time and place that suits you. A donation takes about an hour from check-in to snacks."
                }
                form {
                    onsubmit: submit,
                    Input {
                        label: "Date*",
                        name: "date",
                        input_type: "date",
                        value: date(),
                        required: true,
                        disabled: is_submitting(),
                        on_input: move |event: FormEvent| date.set(event.value()),
                    }
                    Input {
                        label: "Time*",
                        name: "time",
                        input_type: "time",
                        value: time(),
                        required: true,
                        disabled: is_submitting(),
                        on_input: move |event: FormEvent| time.set(event.value()),
                    }
                    Input {
                        label: "Donation Center*",
                        name: "center",
                        placeholder: "City Blood Bank",
                        value: center(),
                        required: true,
                        disabled: is_submitting(),
                        on_input: move |event: FormEvent| center.set(event.value()),
                    }
                    Input {
                        label: "Address",
                        name: "address",
                        value: address(),
                        disabled: is_submitting(),
                        on_input: move |event: FormEvent| address.set(event.value()),
                    }
                    Button {
                        button_type: ButtonType::Submit,
                        disabled: is_submitting(),
                        busy: is_submitting(),
                        if is_submitting() { "Scheduling..." } else { "Schedule Appointment" }
                    }
                }
            }
        }
    }
}
