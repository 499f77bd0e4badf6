//! Figures derived from a donation history.
//!
//! Nothing here is persisted; the screen recomputes these from every fetch.

use chrono::NaiveDate;

use crate::types::Donation;

/// How many lives a single whole-blood donation can save.
const LIVES_PER_DONATION: usize = 3;

/// Summary shown on the donor's impact card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DonationStats {
    pub total_donations: usize,
    pub lives_saved: usize,
    pub last_donation: Option<NaiveDate>,
}

impl DonationStats {
    pub fn compute(donations: &[Donation]) -> Self {
        Self {
            total_donations: donations.len(),
            lives_saved: donations.len() * LIVES_PER_DONATION,
            last_donation: donations.iter().map(|donation| donation.date).max(),
        }
    }
}

/// Orders a history newest first. The sort is stable, so donations sharing a
/// date keep the order the server sent them in.
pub fn sort_newest_first(donations: &mut [Donation]) {
    donations.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation(id: &str, date: (i32, u32, u32)) -> Donation {
        Donation {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            center: "City Blood Bank".to_string(),
            address: String::new(),
            blood_group: None,
            units: None,
            status: None,
        }
    }

    #[test]
    fn empty_history_yields_zeroed_stats() {
        let stats = DonationStats::compute(&[]);
        assert_eq!(stats.total_donations, 0);
        assert_eq!(stats.lives_saved, 0);
        assert_eq!(stats.last_donation, None);
    }

    #[test]
    fn lives_saved_is_three_per_donation() {
        let history = vec![
            donation("a", (2023, 3, 1)),
            donation("b", (2023, 6, 1)),
            donation("c", (2023, 9, 1)),
            donation("d", (2023, 12, 1)),
        ];
        let stats = DonationStats::compute(&history);
        assert_eq!(stats.total_donations, 4);
        assert_eq!(stats.lives_saved, 12);
    }

    #[test]
    fn last_donation_is_the_maximum_date_even_when_unsorted() {
        let history = vec![
            donation("a", (2023, 6, 1)),
            donation("b", (2024, 1, 10)),
            donation("c", (2023, 9, 15)),
        ];
        let stats = DonationStats::compute(&history);
        assert_eq!(stats.last_donation, NaiveDate::from_ymd_opt(2024, 1, 10));
    }

    #[test]
    fn sort_orders_newest_first() {
        let mut history = vec![
            donation("old", (2022, 5, 20)),
            donation("new", (2024, 1, 10)),
            donation("mid", (2023, 9, 15)),
        ];
        sort_newest_first(&mut history);

        let ids: Vec<&str> = history.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn sort_keeps_server_order_for_equal_dates() {
        let mut history = vec![
            donation("first", (2023, 9, 15)),
            donation("second", (2023, 9, 15)),
            donation("newer", (2024, 1, 1)),
            donation("third", (2023, 9, 15)),
        ];
        sort_newest_first(&mut history);

        let ids: Vec<&str> = history.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["newer", "first", "second", "third"]);
    }
}
