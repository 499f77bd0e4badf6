// File: src/components/header.rs
use dioxus::prelude::*;

use crate::hooks::use_session::use_session;
use crate::hooks::use_toast::use_toast;
use crate::Route;

/// Top navigation bar. The right-hand side swaps between auth links and the
/// signed-in user's menu.
#[component]
pub fn Header() -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let navigator = use_navigator();

    rsx! {
        header {
            class: "app-header",
            nav {
                ul {
                    li {
                        Link { to: Route::HomeScreen {}, class: "brand", "LifeDrop" }
                    }
                }
                ul {
                    li {
                        Link { to: Route::DonateScreen {}, "Donate" }
                    }
                    li {
                        Link { to: Route::RequestScreen {}, "Request" }
                    }
                    li {
                        Link { to: Route::MyDonationsScreen {}, "My Donations" }
                    }
                    if let Some(user) = session.user() {
                        li {
                            span { class: "nav-user", "{user.username}" }
                        }
                        li {
                            a {
                                href: "#",
                                role: "button",
                                class: "secondary outline",
                                onclick: move |event| {
                                    event.prevent_default();
                                    session.log_out();
                                    toast.info("You have been logged out");
                                    navigator.push(Route::HomeScreen {});
                                },
                                "Logout"
                            }
                        }
                    } else {
                        li {
                            Link { to: Route::LoginScreen {}, "Login" }
                        }
                        li {
                            Link { to: Route::RegisterScreen {}, class: "register-link", "Register" }
                        }
                    }
                }
            }
        }
    }
}
