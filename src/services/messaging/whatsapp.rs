use async_trait::async_trait;

use super::NotificationProvider;
use crate::models::BookingRecord;

/// Builds a wa.me deep link carrying the booking summary. Opening the
/// link is up to the caller; there is no delivery path of its own.
pub struct WhatsAppLinkProvider {
    business_name: String,
    number: String,
}

impl WhatsAppLinkProvider {
    pub fn new(business_name: String, number: String) -> Self {
        Self {
            business_name,
            number,
        }
    }

    pub fn booking_message(&self, booking: &BookingRecord) -> String {
        format!(
            "Olá, {}! 🚗\n\
             Gostaria de agendar o serviço:\n\
             📋 Serviço: {}\n\
             📅 Data: {}\n\
             🕐 Horário: {}\n\
             👤 Dados do cliente:\n\
             Nome: {}\n\
             Telefone: {}\n\
             Veículo: {} - {}\n\
             💬 Observações: {}\n\
             Aguardo confirmação!",
            self.business_name,
            booking.service_name,
            booking.date,
            booking.time,
            booking.customer_name,
            booking.phone,
            booking.vehicle,
            booking.color,
            booking.notes,
        )
    }
}

#[async_trait]
impl NotificationProvider for WhatsAppLinkProvider {
    async fn notify_booking(&self, booking: &BookingRecord) -> anyhow::Result<String> {
        let message = self.booking_message(booking);
        let link = format!(
            "https://wa.me/{}?text={}",
            self.number,
            encode_component(&message)
        );

        tracing::info!(id = booking.id, "composed WhatsApp handoff link");
        Ok(link)
    }
}

// Percent-encodes everything outside the URL-safe set, UTF-8 byte by byte.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
