// File: src/screens/request.rs
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::Route;

/// Explains how a blood request works before handing over to the form.
#[allow(non_snake_case)]
#[component]
pub fn RequestScreen() -> Element {
    rsx! {
        div {
            class: "narrow",
            Card {
                h2 { class: "page-title", "Need Blood?" }
                p {
                    "When you send a request, every registered donor in your city with a "
                    "matching blood type is notified immediately. Donors respond directly, "
                    "so include a way to reach you in your message."
                }
                ol {
                    li { "Tell us the blood type you need and where you are." }
                    li { "Describe the requirement and how to get in touch." }
                    li { "We notify all matching donors in your city at once." }
                }
                Link { to: Route::RequestBloodScreen {}, class: "cta-link", "Send a Blood Request" }
            }
        }
    }
}
