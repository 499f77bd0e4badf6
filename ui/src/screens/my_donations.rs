//=============================================================================
// File: src/screens/my_donations.rs
//=============================================================================
use api::stats::{sort_newest_first, DonationStats};
use api::types::{Appointment, Donation};
use api::{ApiError, BloodGroup, Client};
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::components::empty_state::EmptyState;
use crate::components::pico::{Accordion, Button, ButtonType, Card, Grid};
use crate::components::require_login::RequireLogin;
use crate::hooks::use_session::use_session;
use crate::hooks::use_toast::{use_toast, Toasts};
use crate::Route;

/// Wording for the blocking panel, depending on what failed.
fn fetch_failure_text(error: &ApiError) -> &'static str {
    if error.is_api() || error.is_rejected() {
        "Could not retrieve donation history"
    } else {
        "Connection error. Please try again later."
    }
}

/// The matching toast. A server-side refusal reads differently from a
/// transport failure.
fn fetch_failure_toast(error: &ApiError) -> &'static str {
    if error.is_api() || error.is_rejected() {
        "Failed to load donation history"
    } else {
        "Failed to load your donation history"
    }
}

/// Drops the appointment the server confirmed as cancelled, and no other.
fn remove_by_id(appointments: &mut Vec<Appointment>, id: &str) {
    appointments.retain(|appointment| appointment.id != id);
}

/// Loads and orders the donor's history. The caller renders the blocking
/// panel from the returned error.
async fn fetch_history(client: Client, mut toast: Toasts) -> Result<Vec<Donation>, ApiError> {
    match client.donation_history().await {
        Ok(mut donations) => {
            sort_newest_first(&mut donations);
            Ok(donations)
        }
        Err(error) => {
            warn!("failed to load donation history: {error}");
            toast.error(fetch_failure_toast(&error));
            Err(error)
        }
    }
}

/// Appointment loading is non-fatal: a failure logs and leaves the list
/// empty instead of raising the blocking panel.
async fn fetch_appointments(client: Client, mut appointments: Signal<Vec<Appointment>>) {
    match client.upcoming_appointments().await {
        Ok(list) => appointments.set(list),
        Err(error) => warn!("failed to load upcoming appointments: {error}"),
    }
}

#[allow(non_snake_case)]
#[component]
pub fn MyDonationsScreen() -> Element {
    rsx! {
        RequireLogin {
            message: "Please log in to view your donations",
            DonationDashboard {}
        }
    }
}

/// The signed-in dashboard. Mounting this component is what triggers the
/// fetches, so it only ever exists behind the login gate. The fetch tasks
/// are owned by this scope and are dropped with it, so a navigation away
/// mid-flight cannot write into an unmounted screen.
#[component]
fn DonationDashboard() -> Element {
    let session = use_session();
    let mut toast = use_toast();

    let client = use_context::<Client>();
    let history_client = client.clone();
    let appointments_client = client.clone();
    let cancel_client = client;

    // Both fetches start on mount and run concurrently; neither waits for
    // the other.
    let mut donations = use_resource(move || fetch_history(history_client.clone(), toast));

    let mut appointments = use_signal(Vec::new);
    use_future(move || fetch_appointments(appointments_client.clone(), appointments));

    let cancel = use_callback(move |id: String| {
        let client = cancel_client.clone();
        spawn(async move {
            match client.cancel_appointment(&id).await {
                Ok(()) => {
                    // The entry disappears only once the server confirmed.
                    remove_by_id(&mut appointments.write(), &id);
                    toast.success("Appointment canceled successfully");
                }
                Err(error) => {
                    warn!("failed to cancel appointment {id}: {error}");
                    toast.error("Failed to cancel appointment");
                }
            }
        });
    });

    rsx! {
        match &*donations.read() {
            None => rsx! {
                h2 { class: "page-title", "My Blood Donation History" }
                Card {
                    div {
                        class: "loading-panel",
                        p { "Loading your donation history..." }
                        progress {}
                    }
                }
            },
            Some(Err(error)) => rsx! {
                Card {
                    h5 { "Error loading donations" }
                    p { "{fetch_failure_text(error)}" }
                    Button {
                        button_type: ButtonType::Danger,
                        outline: true,
                        on_click: move |_| donations.restart(),
                        "Try Again"
                    }
                }
            },
            Some(Ok(history)) => {
                let stats = DonationStats::compute(history);
                let fallback_group = session.user().and_then(|user| user.blood_group);
                rsx! {
                    h2 { class: "page-title", "My Blood Donation History" }
                    ProfileSummary { stats }
                    AppointmentsSection { appointments, on_cancel: cancel }
                    HistorySection { donations: history.clone(), fallback_group }
                    DonationTips {}
                }
            }
        }
    }
}

/// Profile card next to the derived impact figures.
#[component]
fn ProfileSummary(stats: DonationStats) -> Element {
    let session = use_session();

    let user = session.user();
    let username = user
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_else(|| "Donor".to_string());
    let group_label = user
        .as_ref()
        .and_then(|u| u.blood_group)
        .map(|group| group.code())
        .unwrap_or("Not specified");
    let location = match user.as_ref() {
        Some(u) if !u.state.is_empty() => format!(
            "{}, {}",
            if u.city.is_empty() { "City" } else { u.city.as_str() },
            u.state
        ),
        Some(u) if !u.city.is_empty() => u.city.clone(),
        _ => "City".to_string(),
    };
    let initial = username.chars().next().unwrap_or('?').to_uppercase();
    let last_donation = match stats.last_donation {
        Some(date) => date.format("%b %d").to_string(),
        None => "–".to_string(),
    };

    rsx! {
        Grid {
            Card {
                div {
                    class: "profile-card",
                    div { class: "avatar", "{initial}" }
                    h5 { "{username}" }
                    p { "Blood Group: {group_label}" }
                    p { class: "muted", "{location}" }
                }
            }
            Card {
                h5 { "Your Donation Impact" }
                div {
                    class: "impact-grid",
                    div {
                        class: "stat-box",
                        h2 { "{stats.total_donations}" }
                        p { "Donations" }
                    }
                    div {
                        class: "stat-box",
                        h2 { "{stats.lives_saved}" }
                        p { "Lives Saved" }
                    }
                    div {
                        class: "stat-box",
                        h2 { "{last_donation}" }
                        p { "Last Donation" }
                    }
                }
            }
        }
    }
}

#[component]
fn AppointmentsSection(
    appointments: Signal<Vec<Appointment>>,
    on_cancel: EventHandler<String>,
) -> Element {
    let list = appointments.read();

    rsx! {
        Card {
            h5 { "Upcoming Appointments" }
            if list.is_empty() {
                EmptyState {
                    title: "No upcoming appointments",
                    description: "You don't have any upcoming donation appointments.",
                    primary_action: rsx! {
                        Link { to: Route::DonateScreen {}, class: "cta-link", "Schedule a Donation" }
                    },
                }
            } else {
                div {
                    class: "table-wrap",
                    table {
                        thead {
                            tr {
                                th { "Date & Time" }
                                th { "Location" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for appointment in list.iter() {
                                AppointmentRow {
                                    key: "{appointment.id}",
                                    appointment: appointment.clone(),
                                    on_cancel,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One upcoming appointment with its actions.
#[component]
fn AppointmentRow(appointment: Appointment, on_cancel: EventHandler<String>) -> Element {
    let id = appointment.id.clone();
    let date = appointment.date.format("%B %-d, %Y");

    rsx! {
        tr {
            td {
                div { class: "fw-medium", "{date}" }
                div { class: "small muted", "{appointment.time}" }
            }
            td {
                div { class: "fw-medium", "{appointment.center}" }
                div { class: "small muted", "{appointment.address}" }
            }
            td {
                class: "row-actions",
                Button {
                    button_type: ButtonType::Danger,
                    outline: true,
                    on_click: move |_| on_cancel.call(id.clone()),
                    "Cancel"
                }
                Link { to: Route::DonateScreen {}, class: "reschedule-link", "Reschedule" }
            }
        }
    }
}

#[component]
fn HistorySection(donations: Vec<Donation>, fallback_group: Option<BloodGroup>) -> Element {
    rsx! {
        Card {
            h5 { "Donation History" }
            if donations.is_empty() {
                EmptyState {
                    title: "No donations yet",
                    description: "You haven't made any blood donations yet.",
                    primary_action: rsx! {
                        Link { to: Route::DonateScreen {}, class: "cta-link", "Make Your First Donation" }
                    },
                }
            } else {
                div {
                    class: "table-wrap",
                    table {
                        thead {
                            tr {
                                th { "Date" }
                                th { "Location" }
                                th { "Blood Group" }
                                th { "Units" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for donation in donations.iter() {
                                DonationRow {
                                    key: "{donation.id}",
                                    donation: donation.clone(),
                                    fallback_group,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One completed donation row. Older records without their own blood group
/// show the donor's.
#[component]
fn DonationRow(donation: Donation, fallback_group: Option<BloodGroup>) -> Element {
    let date = donation.date.format("%B %-d, %Y");
    let group_code = donation
        .blood_group
        .or(fallback_group)
        .map(|group| group.code())
        .unwrap_or("—");
    let units = donation.units.unwrap_or(1);
    let status = donation.status.clone().unwrap_or_else(|| "Completed".to_string());

    rsx! {
        tr {
            td {
                div { class: "fw-medium", "{date}" }
            }
            td {
                div { class: "fw-medium", "{donation.center}" }
                div { class: "small muted", "{donation.address}" }
            }
            td {
                span { class: "badge badge-blood", "{group_code}" }
            }
            td { "{units}" }
            td {
                span { class: "badge badge-success", "{status}" }
            }
        }
    }
}

#[component]
fn DonationTips() -> Element {
    rsx! {
        Card {
            Accordion {
                title: "Tips for Your Next Donation",
                ul {
                    class: "tips-list",
                    li { "Get a good night's sleep and have a healthy meal before your donation." }
                    li { "Stay hydrated - drink plenty of water before and after donating." }
                    li { "Avoid strenuous physical activity for 24 hours after donating blood." }
                    li { "You're eligible to donate again 3 months after your last whole blood donation." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn appointment(id: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            time: "10:30 AM".to_string(),
            center: "City Blood Bank".to_string(),
            address: "12 Main St".to_string(),
        }
    }

    #[test]
    fn remove_by_id_drops_exactly_the_confirmed_entry() {
        let mut list = vec![appointment("a1"), appointment("b2"), appointment("c3")];
        remove_by_id(&mut list, "b2");

        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a1", "c3"]);
    }

    #[test]
    fn remove_by_id_with_unknown_id_changes_nothing() {
        let mut list = vec![appointment("a1"), appointment("b2")];
        remove_by_id(&mut list, "zz");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn server_reported_failures_get_the_specific_panel_text() {
        let error = ApiError::Api("token expired".to_string());
        assert_eq!(fetch_failure_text(&error), "Could not retrieve donation history");
        assert_eq!(fetch_failure_text(&ApiError::Rejected), "Could not retrieve donation history");
    }

    #[test]
    fn transport_failures_get_the_connection_panel_text() {
        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(
            fetch_failure_text(&error),
            "Connection error. Please try again later."
        );
        assert_eq!(
            fetch_failure_text(&ApiError::Status(502)),
            "Connection error. Please try again later."
        );
    }

    #[test]
    fn failure_toasts_follow_the_same_split() {
        assert_eq!(
            fetch_failure_toast(&ApiError::Rejected),
            "Failed to load donation history"
        );
        assert_eq!(
            fetch_failure_toast(&ApiError::Network("offline".to_string())),
            "Failed to load your donation history"
        );
    }
}

/// Whole-screen checks: mount the real router at /my-donations and read what
/// the server-side renderer produces.
#[cfg(all(test, not(target_arch = "wasm32")))]
mod screen_tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::rc::Rc;
    use std::thread;
    use std::time::Duration;

    use dioxus_core::{NoOpMutations, VirtualDom};
    use dioxus_history::{History, MemoryHistory};

    use super::*;
    use crate::session::Session;
    use api::types::User;

    /// One-thread HTTP stub for the two dashboard endpoints: history succeeds
    /// with two donations (oldest first), appointments always fail.
    fn stub_backend() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                let mut header = String::new();
                loop {
                    header.clear();
                    if reader.read_line(&mut header).unwrap_or(0) == 0 || header == "\r\n" {
                        break;
                    }
                }

                let (status, body) = if request_line.contains("/donation-api/history") {
                    (
                        "200 OK",
                        r#"{"error": false, "payload": [
                            {"_id": "d1", "date": "2023-09-15", "center": "Red Cross Drive"},
                            {"_id": "d2", "date": "2024-01-10", "center": "Central Blood Bank", "bloodGroup": "O+", "units": 2}
                        ]}"#,
                    )
                } else {
                    ("503 Service Unavailable", r#"{"error": "appointments are offline"}"#)
                };

                let _ = write!(
                    stream,
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n{body}",
                    len = body.len(),
                );
            }
        });

        format!("http://{addr}")
    }

    /// Pumps the virtual dom until the rendered output satisfies `done`.
    async fn drive(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
        let mut html = dioxus_ssr::render(dom);
        let finished = tokio::time::timeout(Duration::from_secs(10), async {
            while !done(&html) {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
                html = dioxus_ssr::render(dom);
            }
        })
        .await;
        assert!(finished.is_ok(), "screen never settled; last render:\n{html}");
        html
    }

    fn logged_out_app() -> Element {
        use_context_provider(|| {
            Rc::new(MemoryHistory::with_initial_path("/my-donations")) as Rc<dyn History>
        });
        use_context_provider(Client::new);
        let session = use_signal(Session::default);
        use_context_provider(|| session);
        let toast_stack = use_signal(Vec::new);
        let toast_seq = use_signal(|| 0u64);
        use_context_provider(|| Toasts::new(toast_stack, toast_seq));

        rsx! { Router::<Route> {} }
    }

    #[derive(Props, Clone, PartialEq)]
    struct StubbedAppProps {
        base: String,
    }

    fn stubbed_app(props: StubbedAppProps) -> Element {
        use_context_provider(|| {
            Rc::new(MemoryHistory::with_initial_path("/my-donations")) as Rc<dyn History>
        });
        let base = props.base.clone();
        use_context_provider(move || Client::with_base_url(base));
        let session = use_signal(|| {
            Session::with_user(User {
                username: "maria".to_string(),
                blood_group: Some(BloodGroup::ONegative),
                city: "Lisbon".to_string(),
                state: "Lisboa".to_string(),
            })
        });
        use_context_provider(|| session);
        let toast_stack = use_signal(Vec::new);
        let toast_seq = use_signal(|| 0u64);
        use_context_provider(|| Toasts::new(toast_stack, toast_seq));

        rsx! { Router::<Route> {} }
    }

    #[tokio::test]
    async fn signed_out_visitors_never_mount_the_dashboard() {
        let mut dom = VirtualDom::new(logged_out_app);
        dom.rebuild_in_place();

        // First frame: the guard's placeholder and none of the dashboard
        // states, loading included. The fetches belong to the inner
        // component, so nothing was requested.
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Redirecting to login..."));
        assert!(!html.contains("Loading your donation history"));
        assert!(!html.contains("Your Donation Impact"));
        assert!(!html.contains("Error loading donations"));

        // The guard's effect then lands the visitor on the login form and
        // explains why.
        let html = drive(&mut dom, |html| html.contains("New donor?")).await;
        assert!(html.contains("Please log in to view your donations"));
        assert!(!html.contains("Loading your donation history"));
        assert!(!html.contains("Your Donation Impact"));
    }

    #[tokio::test]
    async fn appointments_failure_still_shows_the_fetched_history() {
        let base = stub_backend();
        let mut dom = VirtualDom::new_with_props(stubbed_app, StubbedAppProps { base });
        dom.rebuild_in_place();

        let html = drive(&mut dom, |html| html.contains("Central Blood Bank")).await;

        // Content rendered despite the 503 on appointments; that failure
        // only left its own section empty.
        assert!(html.contains("Your Donation Impact"));
        assert!(html.contains("No upcoming appointments"));
        assert!(!html.contains("Error loading donations"));
        assert!(!html.contains("Loading your donation history"));

        // Both rows arrived and the newer donation is listed first.
        let newer = html.find("Central Blood Bank").unwrap();
        let older = html.find("Red Cross Drive").unwrap();
        assert!(newer < older);
    }
}
