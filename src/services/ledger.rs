use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, Utc};
use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{BookingRecord, BookingRequest, BookingStatus, WorkingHours, NOTES_PLACEHOLDER};
use crate::services::scheduling;

pub const STORAGE_KEY: &str = "extreme_bookings";

/// Storage backend for the booking collection. The whole collection is
/// read and written as one unit, newest booking first.
pub trait LedgerStore: Send + Sync {
    fn load(&self) -> Result<Vec<BookingRecord>, AppError>;
    fn store(&self, records: &[BookingRecord]) -> Result<(), AppError>;
}

pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

impl LedgerStore for SqliteStore {
    fn load(&self) -> Result<Vec<BookingRecord>, AppError> {
        let conn = self.conn.lock().unwrap();
        let raw = queries::get_value(&conn, STORAGE_KEY)?;

        Ok(match raw {
            Some(json) => match serde_json::from_str(&json) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("stored bookings are malformed, treating as empty: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        })
    }

    fn store(&self, records: &[BookingRecord]) -> Result<(), AppError> {
        let json = serde_json::to_string(records)?;
        let conn = self.conn.lock().unwrap();
        queries::set_value(&conn, STORAGE_KEY, &json)?;
        Ok(())
    }
}

pub struct Ledger {
    store: Arc<dyn LedgerStore>,
    submit_delay: Duration,
}

impl Ledger {
    pub fn new(store: Arc<dyn LedgerStore>, submit_delay: Duration) -> Self {
        Self {
            store,
            submit_delay,
        }
    }

    /// Validates the request, waits out the configured submit delay, then
    /// appends the new booking at the head of the collection. Nothing is
    /// persisted when validation fails.
    pub async fn submit(
        &self,
        request: &BookingRequest,
        service_name: &str,
        hours: &WorkingHours,
    ) -> Result<BookingRecord, AppError> {
        if request.time.trim().is_empty()
            || request.name.trim().is_empty()
            || request.phone.trim().is_empty()
            || request.vehicle.trim().is_empty()
        {
            return Err(AppError::Validation("missing required fields".to_string()));
        }

        let today = Local::now().date_naive();
        let date = scheduling::validate_slot(&request.date, &request.time, hours, today)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        tokio::time::sleep(self.submit_delay).await;

        let mut records = self.store.load()?;

        // Wall-clock ids, bumped past the newest existing id so two
        // submissions in the same millisecond stay distinct.
        let now_ms = Utc::now().timestamp_millis();
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let id = now_ms.max(max_id + 1);

        let notes = if request.notes.trim().is_empty() {
            NOTES_PLACEHOLDER.to_string()
        } else {
            request.notes.clone()
        };

        let record = BookingRecord {
            id,
            service_name: service_name.to_string(),
            date: date.format("%d/%m/%Y").to_string(),
            time: request.time.clone(),
            customer_name: request.name.clone(),
            phone: request.phone.clone(),
            vehicle: request.vehicle.clone(),
            color: request.color.clone(),
            notes,
            status: BookingStatus::Requested,
        };

        records.insert(0, record.clone());
        self.store.store(&records)?;

        tracing::info!(id, service = service_name, "booking recorded");
        Ok(record)
    }

    /// Digit-only substring lookup. A blank query returns nothing and
    /// skips the store read entirely.
    pub fn find_by_phone(&self, query: &str) -> Result<Vec<BookingRecord>, AppError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let needle = normalize_digits(query);
        let records = self.store.load()?;

        Ok(records
            .into_iter()
            .filter(|r| normalize_digits(&r.phone).contains(&needle))
            .collect())
    }

    pub fn read_all(&self) -> Result<Vec<BookingRecord>, AppError> {
        self.store.load()
    }

    /// Staff-side hook: overwrite the status of an existing booking.
    pub fn update_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<BookingRecord, AppError> {
        let mut records = self.store.load()?;

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

        record.status = status;
        let updated = record.clone();
        self.store.store(&records)?;

        tracing::info!(id, status = status.as_str(), "booking status updated");
        Ok(updated)
    }
}

fn normalize_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
