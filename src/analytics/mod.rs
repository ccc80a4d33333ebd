use serde::Serialize;

use crate::models::bookings::{self, Status};
use crate::models::payments;

/// Counts of a user's bookings per lifecycle status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusCounts {
    pub pending: u64,
    pub confirmed: u64,
    pub declined: u64,
    pub cancelled: u64,
    pub completed: u64,
}

/// One slice of a grouped breakdown, with its share of the whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub label: String,
    pub count: u64,
    /// Share of all bookings, rounded to one decimal place.
    pub percentage: f64,
}

/// The full analytics payload for GET /api/analytics.
#[derive(Debug, Clone, Serialize)]
pub struct BookingAnalytics {
    pub total_bookings: u64,
    pub status_counts: StatusCounts,
    /// Sum over completed payments.
    pub total_revenue: f64,
    /// Mean completed-payment amount (0 when there are none).
    pub average_payment: f64,
    pub event_type_breakdown: Vec<CategoryShare>,
    pub top_venues: Vec<CategoryShare>,
}

/// Aggregate a user's bookings and completed payments into the dashboard
/// figures. Linear scans over already-fetched rows; no database access.
pub fn compute(
    bookings: &[bookings::Model],
    completed_payments: &[payments::Model],
) -> BookingAnalytics {
    let mut counts = StatusCounts::default();
    for b in bookings {
        match b.status {
            Status::Pending => counts.pending += 1,
            Status::Confirmed => counts.confirmed += 1,
            Status::Declined => counts.declined += 1,
            Status::Cancelled => counts.cancelled += 1,
            Status::Completed => counts.completed += 1,
        }
    }

    let total_revenue: f64 = completed_payments.iter().map(|p| p.amount).sum();
    let average_payment = if completed_payments.is_empty() {
        0.0
    } else {
        total_revenue / completed_payments.len() as f64
    };

    let event_type_breakdown = breakdown(bookings, |b| format!("{:?}", b.event_type));
    let mut top_venues = breakdown(bookings, |b| b.venue_name.clone());
    top_venues.truncate(5);

    BookingAnalytics {
        total_bookings: bookings.len() as u64,
        status_counts: counts,
        total_revenue,
        average_payment,
        event_type_breakdown,
        top_venues,
    }
}

/// Group bookings by a label and compute each group's percentage share,
/// sorted by descending count. Percentages are rounded to one decimal, so
/// they sum to 100 within rounding tolerance.
fn breakdown<F>(bookings: &[bookings::Model], label_of: F) -> Vec<CategoryShare>
where
    F: Fn(&bookings::Model) -> String,
{
    let total = bookings.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: Vec<(String, u64)> = Vec::new();
    for b in bookings {
        let label = label_of(b);
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, c)) => *c += 1,
            None => counts.push((label, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    counts
        .into_iter()
        .map(|(label, count)| CategoryShare {
            label,
            count,
            percentage: (count as f64 * 1000.0 / total as f64).round() / 10.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bookings::EventType;
    use chrono::Utc;
    use uuid::Uuid;

    fn booking(status: Status, event_type: EventType, venue: &str) -> bookings::Model {
        bookings::Model {
            id: Uuid::new_v4(),
            artist_id: Uuid::new_v4(),
            promoter_id: Uuid::new_v4(),
            event_name: "Show".to_string(),
            event_type,
            event_date: Utc::now().date_naive(),
            start_time: "19:00".to_string(),
            end_time: "23:00".to_string(),
            venue_name: venue.to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            expected_attendees: 100,
            budget_tier: "1000-2500".to_string(),
            message: None,
            contact_name: "A".to_string(),
            contact_email: "a@example.com".to_string(),
            status,
            total_amount: None,
            deposit_amount: None,
            decline_reason: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn payment(amount: f64) -> payments::Model {
        payments::Model {
            id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            payer_id: Uuid::new_v4(),
            amount,
            kind: payments::Kind::Deposit,
            status: payments::Status::Completed,
            method: payments::Method::Card,
            transaction_id: "TXN-test".to_string(),
            due_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn status_counts_cover_every_booking() {
        let rows = vec![
            booking(Status::Pending, EventType::Concert, "A"),
            booking(Status::Pending, EventType::Concert, "A"),
            booking(Status::Confirmed, EventType::Festival, "B"),
            booking(Status::Completed, EventType::Wedding, "C"),
        ];
        let analytics = compute(&rows, &[]);
        assert_eq!(analytics.total_bookings, 4);
        assert_eq!(analytics.status_counts.pending, 2);
        assert_eq!(analytics.status_counts.confirmed, 1);
        assert_eq!(analytics.status_counts.completed, 1);
        assert_eq!(analytics.status_counts.declined, 0);
    }

    #[test]
    fn revenue_sums_completed_payments() {
        let rows = vec![booking(Status::Completed, EventType::Concert, "A")];
        let pays = vec![payment(1250.0), payment(3750.0)];
        let analytics = compute(&rows, &pays);
        assert_eq!(analytics.total_revenue, 5000.0);
        assert_eq!(analytics.average_payment, 2500.0);
    }

    #[test]
    fn empty_input_produces_zeroes_not_nan() {
        let analytics = compute(&[], &[]);
        assert_eq!(analytics.total_bookings, 0);
        assert_eq!(analytics.average_payment, 0.0);
        assert!(analytics.event_type_breakdown.is_empty());
    }

    #[test]
    fn event_type_percentages_sum_to_100_within_tolerance() {
        // 7 bookings over 3 categories: shares don't divide evenly.
        let rows = vec![
            booking(Status::Pending, EventType::Concert, "A"),
            booking(Status::Pending, EventType::Concert, "A"),
            booking(Status::Pending, EventType::Concert, "A"),
            booking(Status::Pending, EventType::Festival, "B"),
            booking(Status::Pending, EventType::Festival, "B"),
            booking(Status::Pending, EventType::Wedding, "C"),
            booking(Status::Pending, EventType::Wedding, "C"),
        ];
        let analytics = compute(&rows, &[]);
        let sum: f64 = analytics
            .event_type_breakdown
            .iter()
            .map(|s| s.percentage)
            .sum();
        assert!((sum - 100.0).abs() < 0.5, "sum was {sum}");
    }

    #[test]
    fn breakdown_is_sorted_by_count_descending() {
        let rows = vec![
            booking(Status::Pending, EventType::Wedding, "A"),
            booking(Status::Pending, EventType::Concert, "B"),
            booking(Status::Pending, EventType::Concert, "B"),
        ];
        let analytics = compute(&rows, &[]);
        assert_eq!(analytics.event_type_breakdown[0].label, "Concert");
        assert_eq!(analytics.event_type_breakdown[0].count, 2);
    }
}
