// File: src/screens/home.rs
use dioxus::prelude::*;

use crate::components::pico::{Card, Grid};
use crate::Route;

#[allow(non_snake_case)]
#[component]
pub fn HomeScreen() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "Donate Blood, Save Lives" }
            p { "One donation can save up to three lives. Find a donation slot or reach registered donors in your city." }
            div {
                class: "hero-actions",
                Link { to: Route::DonateScreen {}, class: "cta-link", "Donate Now" }
                Link { to: Route::RequestScreen {}, class: "cta-link secondary", "Request Blood" }
            }
        }
        Grid {
            Card {
                h5 { "Schedule a Donation" }
                p { "Book an appointment at a donation center near you in under a minute." }
                Link { to: Route::DonateScreen {}, "Find a slot" }
            }
            Card {
                h5 { "Request Blood" }
                p { "Need blood urgently? Notify every matching donor registered in your city." }
                Link { to: Route::RequestBloodScreen {}, "Send a request" }
            }
            Card {
                h5 { "Track Your Impact" }
                p { "See your donation history, upcoming appointments and the lives you've helped save." }
                Link { to: Route::MyDonationsScreen {}, "My donations" }
            }
        }
    }
}
