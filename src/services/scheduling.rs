use chrono::NaiveDate;

use crate::models::WorkingHours;

#[derive(Debug)]
pub enum SchedulingError {
    InvalidDate(String),
    DateInPast,
    SlotUnavailable { slots: String },
}

impl std::fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingError::InvalidDate(raw) => {
                write!(f, "could not understand the date: {raw}")
            }
            SchedulingError::DateInPast => {
                write!(f, "that date has already passed, please pick a future day")
            }
            SchedulingError::SlotUnavailable { slots } => {
                write!(f, "that time is not available on the chosen day. Open slots: {slots}")
            }
        }
    }
}

/// Accepts the form's ISO date or an already-normalized display date.
pub fn parse_booking_date(raw: &str) -> Result<NaiveDate, SchedulingError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .map_err(|_| SchedulingError::InvalidDate(raw.to_string()))
}

pub fn validate_slot(
    raw_date: &str,
    time: &str,
    hours: &WorkingHours,
    today: NaiveDate,
) -> Result<NaiveDate, SchedulingError> {
    let date = parse_booking_date(raw_date)?;

    if date < today {
        return Err(SchedulingError::DateInPast);
    }

    if !hours.has_slot(date, time) {
        return Err(SchedulingError::SlotUnavailable {
            slots: hours.slots_for(date).join(", "),
        });
    }

    Ok(date)
}
