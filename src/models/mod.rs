pub mod booking;
pub mod hours;

pub use booking::{BookingRecord, BookingRequest, BookingStatus, NOTES_PLACEHOLDER};
pub use hours::WorkingHours;
