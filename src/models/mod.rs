pub mod artists;
pub mod bookings;
pub mod contracts;
pub mod favorites;
pub mod notifications;
pub mod payments;
pub mod promoters;
pub mod subscriptions;
pub mod users;
