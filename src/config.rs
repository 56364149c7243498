use std::env;

use crate::models::WorkingHours;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub admin_token: String,
    pub business_name: String,
    pub whatsapp_number: String,
    pub instagram: String,
    pub address: String,
    pub maps_link: String,
    pub working_hours: WorkingHours,
    pub submit_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "stetica.db".to_string()),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            business_name: env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "EXTREME STÉTICA".to_string()),
            whatsapp_number: env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "5573988176142".to_string()),
            instagram: env::var("INSTAGRAM_HANDLE")
                .unwrap_or_else(|_| "@extreme_stetica".to_string()),
            address: env::var("BUSINESS_ADDRESS").unwrap_or_else(|_| {
                "R. Edson Ribeiro Almeida, 150, Maracás - BA, 45360-000".to_string()
            }),
            maps_link: env::var("MAPS_LINK").unwrap_or_else(|_| {
                "https://www.google.com/maps/place/R.+Edson+Ribeiro+Almeida,+150,+Maracás+-+BA,+45360-000/@-13.4409851,-40.4398782,17z/".to_string()
            }),
            working_hours: working_hours_from_env(),
            submit_delay_ms: env::var("SUBMIT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1500),
        }
    }
}

fn working_hours_from_env() -> WorkingHours {
    match env::var("WORKING_HOURS_JSON") {
        Ok(json) => match WorkingHours::from_json(&json) {
            Ok(hours) => hours,
            Err(e) => {
                tracing::warn!("invalid WORKING_HOURS_JSON, using defaults: {e}");
                WorkingHours::default()
            }
        },
        Err(_) => WorkingHours::default(),
    }
}
