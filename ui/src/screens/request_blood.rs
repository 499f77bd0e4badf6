//=============================================================================
// File: src/screens/request_blood.rs
//=============================================================================
use api::types::BloodRequest;
use api::{BloodGroup, Client};
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::pico::{Button, ButtonType, Card, Input, Select, TextArea};
use crate::hooks::use_toast::use_toast;

/// Grammar-correct notified-donor line for the success banner and toast.
fn donor_notice(count: u32) -> String {
    if count == 1 {
        "1 matching donor has been notified.".to_string()
    } else {
        format!("{count} matching donors have been notified.")
    }
}

#[allow(non_snake_case)]
#[component]
pub fn RequestBloodScreen() -> Element {
    let client = use_context::<Client>();
    let mut toast = use_toast();

    let mut blood_type = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut is_sending = use_signal(|| false);
    let mut donors_notified = use_signal(|| None::<u32>);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        // The empty placeholder can't pass `required`, but guard anyway.
        let Ok(group) = blood_type.peek().parse::<BloodGroup>() else {
            toast.error("Please select a blood type");
            return;
        };
        let request = BloodRequest {
            blood_type: group,
            city: city.peek().clone(),
            message: message.peek().clone(),
        };

        is_sending.set(true);
        donors_notified.set(None);

        let client = client.clone();
        spawn(async move {
            match client.request_blood(&request).await {
                Ok(count) => {
                    donors_notified.set(Some(count));
                    toast.success(format!("Request sent successfully! {}", donor_notice(count)));
                    blood_type.set(String::new());
                    city.set(String::new());
                    message.set(String::new());
                }
                Err(error) => match error.server_message() {
                    Some(server_message) => toast.error(server_message.to_string()),
                    None => toast.error("Error sending request. Please try again."),
                },
            }
            is_sending.set(false);
        });
    };

    let group_options: Vec<(String, String)> = BloodGroup::iter()
        .map(|group| (group.code().to_string(), group.code().to_string()))
        .collect();

    rsx! {
        div {
            class: "narrow",
            Card {
                h2 { class: "page-title", "Request Blood" }

                if let Some(count) = donors_notified() {
                    div {
                        class: "alert alert-success",
                        role: "alert",
                        "Request sent successfully! {donor_notice(count)}"
                    }
                }

                form {
                    onsubmit: submit,
                    Select {
                        label: "Blood Type Required*",
                        name: "bloodType",
                        options: group_options,
                        value: blood_type(),
                        placeholder: "Select Blood Type",
                        required: true,
                        disabled: is_sending(),
                        on_change: move |event: FormEvent| blood_type.set(event.value()),
                    }
                    Input {
                        label: "City*",
                        name: "city",
                        value: city(),
                        required: true,
                        disabled: is_sending(),
                        on_input: move |event: FormEvent| city.set(event.value()),
                    }
                    TextArea {
                        label: "Message*",
                        name: "message",
                        placeholder: "Please provide details about the requirement...",
                        value: message(),
                        required: true,
                        disabled: is_sending(),
                        on_input: move |event: FormEvent| message.set(event.value()),
                    }
                    Button {
                        button_type: ButtonType::Submit,
                        disabled: is_sending(),
                        busy: is_sending(),
                        if is_sending() { "Sending Request..." } else { "Send Request" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_donor_reads_singular() {
        assert_eq!(donor_notice(1), "1 matching donor has been notified.");
    }

    #[test]
    fn many_donors_read_plural() {
        assert_eq!(donor_notice(5), "5 matching donors have been notified.");
    }

    #[test]
    fn zero_donors_read_plural() {
        assert_eq!(donor_notice(0), "0 matching donors have been notified.");
    }
}
