use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::catalog::{Product, Service, PRODUCTS, SERVICES};
use crate::models::WorkingHours;
use crate::state::AppState;

pub async fn get_services() -> Json<&'static [Service]> {
    Json(SERVICES)
}

pub async fn get_products() -> Json<&'static [Product]> {
    Json(PRODUCTS)
}

pub async fn get_hours(State(state): State<Arc<AppState>>) -> Json<WorkingHours> {
    Json(state.config.working_hours.clone())
}

#[derive(Serialize)]
pub struct ContactResponse {
    pub business_name: String,
    pub whatsapp: String,
    pub instagram: String,
    pub address: String,
    pub maps_link: String,
}

pub async fn get_contact(State(state): State<Arc<AppState>>) -> Json<ContactResponse> {
    Json(ContactResponse {
        business_name: state.config.business_name.clone(),
        whatsapp: state.config.whatsapp_number.clone(),
        instagram: state.config.instagram.clone(),
        address: state.config.address.clone(),
        maps_link: state.config.maps_link.clone(),
    })
}
