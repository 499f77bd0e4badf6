// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
mod screens;
mod session;

use api::Client;
use components::header::Header;
use components::pico::Container;
use components::toast::ToastHost;
use hooks::use_toast::Toasts;
use screens::donate::DonateScreen;
use screens::home::HomeScreen;
use screens::login::LoginScreen;
use screens::my_donations::MyDonationsScreen;
use screens::register::RegisterScreen;
use screens::request::RequestScreen;
use screens::request_blood::RequestBloodScreen;
use session::Session;

/// The application's routes. Screens navigate by pushing these; nothing
/// builds URLs by hand.
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RootLayout)]
        #[route("/")]
        HomeScreen {},
        #[route("/register")]
        RegisterScreen {},
        #[route("/login")]
        LoginScreen {},
        #[route("/donate")]
        DonateScreen {},
        #[route("/request")]
        RequestScreen {},
        #[route("/request-blood")]
        RequestBloodScreen {},
        #[route("/header")]
        HeaderScreen {},
        #[route("/my-donations")]
        MyDonationsScreen {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Shared frame around every route: the nav bar, the routed screen and the
/// toast overlay.
#[component]
fn RootLayout() -> Element {
    rsx! {
        Header {}
        Container {
            Outlet::<Route> {}
        }
        ToastHost {}
    }
}

/// The navigation bar is also addressable on its own.
#[component]
fn HeaderScreen() -> Element {
    rsx! {
        Header {}
    }
}

/// Catch-all for unknown paths.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section {
            class: "hero",
            h2 { "Page not found" }
            p { "There's nothing at /{path}." }
            Link { to: Route::HomeScreen {}, class: "cta-link", "Back to Home" }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    // Capabilities provided once for the whole tree: the backend client, the
    // session and the toast stack.
    use_context_provider(Client::new);

    let session = use_signal(Session::restore);
    use_context_provider(|| session);

    let toast_stack = use_signal(Vec::new);
    let toast_seq = use_signal(|| 0u64);
    use_context_provider(|| Toasts::new(toast_stack, toast_seq));

    let app_css = r#"
    /* --- FRAME --- */
    body {
        background-color: var(--pico-background-color);
    }

    .app-header {
        padding: 0 1rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
    }

    .app-header .brand {
        font-weight: 700;
        font-size: 1.25rem;
        color: #d32f2f;
        text-decoration: none;
    }

    .app-header .nav-user {
        color: var(--pico-muted-color);
    }

    .app-header .register-link {
        color: #d32f2f;
        font-weight: 600;
    }

    .page-title {
        color: #d32f2f;
        text-align: center;
    }

    .narrow {
        max-width: 640px;
        margin: 0 auto;
    }

    .muted { color: var(--pico-muted-color); }
    .small { font-size: 0.875rem; }
    .fw-medium { font-weight: 500; }

    /* --- HOME HERO --- */
    .hero {
        text-align: center;
        padding: 3rem 1rem 2rem;
    }

    .hero-actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
        margin-top: 1.5rem;
    }

    .cta-link {
        display: inline-block;
        padding: 0.5rem 1.25rem;
        border-radius: 30px;
        background-color: #d32f2f;
        color: #fff;
        text-decoration: none;
    }

    .cta-link.secondary {
        background-color: transparent;
        border: 1px solid #d32f2f;
        color: #d32f2f;
    }

    /* --- DASHBOARD --- */
    .loading-panel {
        text-align: center;
        padding: 2rem 1rem;
    }

    .profile-card {
        text-align: center;
    }

    .avatar {
        width: 80px;
        height: 80px;
        border-radius: 50%;
        background-color: #d32f2f;
        color: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2rem;
        margin: 0 auto 1rem;
    }

    .impact-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1rem;
        text-align: center;
    }

    .stat-box {
        padding: 1rem;
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-sectioning-background-color);
    }

    .stat-box h2 {
        color: #d32f2f;
        margin-bottom: 0;
    }

    .stat-box p {
        margin-bottom: 0;
        font-size: 0.875rem;
    }

    .table-wrap { overflow-x: auto; }

    .row-actions {
        display: flex;
        gap: 0.5rem;
        align-items: center;
    }

    .row-actions button {
        width: auto;
        margin-bottom: 0;
        padding: 0.25rem 0.75rem;
    }

    button.danger {
        color: #d32f2f;
        border-color: #d32f2f;
    }

    .reschedule-link { font-size: 0.875rem; }

    .badge {
        display: inline-block;
        padding: 0.2rem 0.65rem;
        border-radius: 30px;
        font-size: 0.8rem;
        color: #fff;
    }

    .badge-blood { background-color: #d32f2f; }
    .badge-success { background-color: #2e7d32; }

    .tips-list { margin-bottom: 0; }

    /* --- FORMS --- */
    .submit-button {
        border-radius: 30px;
        background-color: #d32f2f;
        border-color: #d32f2f;
    }

    .alert {
        padding: 0.75rem 1rem;
        border-radius: var(--pico-border-radius);
        margin-bottom: 1rem;
    }

    .alert-success {
        background-color: #e8f5e9;
        border: 1px solid #2e7d32;
        color: #1b5e20;
    }

    /* --- TOASTS --- */
    .toast-stack {
        position: fixed;
        top: 1rem;
        right: 1rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        z-index: 1000;
        max-width: 22rem;
    }

    .toast {
        margin: 0;
        padding: 0.75rem 1rem;
        cursor: pointer;
        border-left: 0.3rem solid var(--pico-muted-border-color);
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
    }

    .toast-success { border-left-color: #2e7d32; }
    .toast-error { border-left-color: #d32f2f; }
    .toast-info { border-left-color: #0277bd; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{app_css}"
        }
        Router::<Route> {}
    }
}
