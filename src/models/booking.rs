use serde::{Deserialize, Serialize};

/// Stored when a customer leaves the notes field blank.
pub const NOTES_PLACEHOLDER: &str = "Nenhuma";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: i64,
    pub service_name: String,
    pub date: String,
    pub time: String,
    pub customer_name: String,
    pub phone: String,
    pub vehicle: String,
    pub color: String,
    pub notes: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Requested,
    Confirmed,
    InProgress,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Requested => "requested",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "confirmed" => BookingStatus::Confirmed,
            "in_progress" => BookingStatus::InProgress,
            "completed" => BookingStatus::Completed,
            _ => BookingStatus::Requested,
        }
    }

    pub fn stage_index(&self) -> usize {
        *self as usize
    }
}

/// Form fields as submitted by a customer; the service name is resolved
/// from the catalog separately.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub vehicle: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub notes: String,
}
