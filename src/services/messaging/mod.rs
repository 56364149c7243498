pub mod whatsapp;

use async_trait::async_trait;

use crate::models::BookingRecord;

/// Hands a freshly persisted booking off to the business's notification
/// channel and returns the link the customer should be sent through.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    async fn notify_booking(&self, booking: &BookingRecord) -> anyhow::Result<String>;
}
