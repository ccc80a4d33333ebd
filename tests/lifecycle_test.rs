///! Integration test walking a booking through its whole lifecycle using the
///! pure domain rules: request → accept → contract → signatures → payments →
///! completion. No running server or database is needed.
///!
///! Run with: `cargo test --test lifecycle_test`
use chrono::{Days, Utc};
use uuid::Uuid;

use livevibe_backend::analytics;
use livevibe_backend::models::bookings::{
    self, AcceptBooking, CreateBooking, EventType, LifecycleError,
};
use livevibe_backend::models::contracts::{self, Party, SIGNING_WINDOW_DAYS};
use livevibe_backend::models::payments::{self, quote_amount};

fn booking_request(event_date: chrono::NaiveDate) -> CreateBooking {
    CreateBooking {
        artist_id: Uuid::new_v4(),
        event_name: "Summer Rooftop Session".to_string(),
        event_type: EventType::PrivateParty,
        event_date,
        start_time: "20:00".to_string(),
        end_time: "23:30".to_string(),
        venue_name: "Skyline Terrace".to_string(),
        city: "Denver".to_string(),
        state: "CO".to_string(),
        expected_attendees: 120,
        budget_tier: "2500-5000".to_string(),
        message: Some("Looking for an acoustic set".to_string()),
        contact_name: "Sam Okafor".to_string(),
        contact_email: "sam@example.com".to_string(),
    }
}

fn booking_row(status: bookings::Status, event_date: chrono::NaiveDate) -> bookings::Model {
    bookings::Model {
        id: Uuid::new_v4(),
        artist_id: Uuid::new_v4(),
        promoter_id: Uuid::new_v4(),
        event_name: "Summer Rooftop Session".to_string(),
        event_type: EventType::PrivateParty,
        event_date,
        start_time: "20:00".to_string(),
        end_time: "23:30".to_string(),
        venue_name: "Skyline Terrace".to_string(),
        city: "Denver".to_string(),
        state: "CO".to_string(),
        expected_attendees: 120,
        budget_tier: "2500-5000".to_string(),
        message: None,
        contact_name: "Sam Okafor".to_string(),
        contact_email: "sam@example.com".to_string(),
        status,
        total_amount: Some(5000.0),
        deposit_amount: Some(1250.0),
        decline_reason: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn draft_contract(booking_id: Uuid, amount: f64) -> contracts::Model {
    contracts::Model {
        id: Uuid::new_v4(),
        booking_id,
        amount,
        template: contracts::Template::Standard,
        status: contracts::Status::Draft,
        artist_signed: false,
        promoter_signed: false,
        created_at: Utc::now(),
        sent_at: None,
        signed_at: None,
        expires_at: None,
    }
}

#[test]
fn test_happy_path_request_to_completion() {
    let today = Utc::now().date_naive();
    let event_date = today + Days::new(14);

    // Promoter submits a valid request; it enters the lifecycle as pending.
    let request = booking_request(event_date);
    assert!(request.validate(today).is_ok());
    let mut booking = booking_row(bookings::Status::Pending, event_date);

    // Artist accepts with quoted terms.
    let terms = AcceptBooking {
        total_amount: 5000.0,
        deposit_amount: 1250.0,
    };
    assert!(terms.validate().is_ok());
    booking.check_transition(bookings::Status::Confirmed).unwrap();
    booking.status = bookings::Status::Confirmed;

    // Artist drafts and sends a contract over the quoted total.
    let mut contract = draft_contract(booking.id, terms.total_amount);
    let now = Utc::now();
    let (sent_at, expires_at) = contract.prepare_send(now).unwrap();
    assert_eq!(expires_at, sent_at + Days::new(SIGNING_WINDOW_DAYS));
    contract.status = contracts::Status::Sent;
    contract.sent_at = Some(sent_at);
    contract.expires_at = Some(expires_at);

    // Both parties sign; the second signature flips the status.
    let first = contract.apply_signature(Party::Promoter, now).unwrap();
    assert_eq!(first.status, contracts::Status::Sent);
    contract.promoter_signed = first.promoter_signed;

    let second = contract.apply_signature(Party::Artist, now).unwrap();
    assert_eq!(second.status, contracts::Status::Signed);
    assert!(second.artist_signed && second.promoter_signed);
    assert!(second.signed_at.is_some());

    // Promoter pays the deposit, then the balance.
    let deposit = quote_amount(payments::Kind::Deposit, 5000.0, 1250.0, &[]).unwrap();
    assert_eq!(deposit, 1250.0);
    let balance =
        quote_amount(payments::Kind::Balance, 5000.0, 1250.0, &[payments::Kind::Deposit]).unwrap();
    assert_eq!(balance, 3750.0);
    assert_eq!(deposit + balance, 5000.0);

    // After the event date the artist marks the booking completed.
    let after_event = event_date + Days::new(1);
    booking.check_completable(after_event).unwrap();
    booking.status = bookings::Status::Completed;
    assert!(booking.status.is_terminal());
}

#[test]
fn test_completion_is_blocked_until_the_event_date() {
    let today = Utc::now().date_naive();
    let booking = booking_row(bookings::Status::Confirmed, today + Days::new(7));

    assert_eq!(
        booking.check_completable(today).unwrap_err(),
        LifecycleError::EventNotOver
    );
    // On the event date itself completion is allowed.
    assert!(booking.check_completable(today + Days::new(7)).is_ok());
}

#[test]
fn test_declined_booking_admits_no_further_steps() {
    let today = Utc::now().date_naive();
    let booking = booking_row(bookings::Status::Declined, today + Days::new(7));

    for next in [
        bookings::Status::Confirmed,
        bookings::Status::Cancelled,
        bookings::Status::Completed,
    ] {
        assert!(booking.check_transition(next).is_err());
    }
}

#[test]
fn test_full_payment_up_front_earns_the_discount() {
    // Paying everything before any deposit gets 5% off the total.
    let full = quote_amount(payments::Kind::Full, 5000.0, 1250.0, &[]).unwrap();
    assert_eq!(full, 4750.0);

    // Once a deposit is in, the discount path is closed.
    assert!(
        quote_amount(payments::Kind::Full, 5000.0, 1250.0, &[payments::Kind::Deposit]).is_err()
    );
}

#[test]
fn test_lapsed_contract_expires_instead_of_accepting_signatures() {
    let now = Utc::now();
    let mut contract = draft_contract(Uuid::new_v4(), 5000.0);
    contract.status = contracts::Status::Sent;
    contract.sent_at = Some(now - Days::new(SIGNING_WINDOW_DAYS + 1));
    contract.expires_at = Some(now - Days::new(1));

    assert!(contract.expiry_due(now));
    contract.status = contracts::Status::Expired;
    assert!(contract.apply_signature(Party::Artist, now).is_err());
}

#[test]
fn test_dashboard_reflects_the_finished_lifecycle() {
    let today = Utc::now().date_naive();
    let completed = booking_row(bookings::Status::Completed, today);
    let pending = booking_row(bookings::Status::Pending, today + Days::new(30));

    let pays = vec![
        payments::Model {
            id: Uuid::new_v4(),
            booking_id: completed.id,
            payer_id: completed.promoter_id,
            amount: 1250.0,
            kind: payments::Kind::Deposit,
            status: payments::Status::Completed,
            method: payments::Method::Card,
            transaction_id: "TXN-aaaa".to_string(),
            due_date: None,
            created_at: Utc::now(),
        },
        payments::Model {
            id: Uuid::new_v4(),
            booking_id: completed.id,
            payer_id: completed.promoter_id,
            amount: 3750.0,
            kind: payments::Kind::Balance,
            status: payments::Status::Completed,
            method: payments::Method::Card,
            transaction_id: "TXN-bbbb".to_string(),
            due_date: None,
            created_at: Utc::now(),
        },
    ];

    let dashboard = analytics::compute(&[completed, pending], &pays);
    assert_eq!(dashboard.total_bookings, 2);
    assert_eq!(dashboard.status_counts.completed, 1);
    assert_eq!(dashboard.status_counts.pending, 1);
    assert_eq!(dashboard.total_revenue, 5000.0);
    assert_eq!(dashboard.average_payment, 2500.0);
}
