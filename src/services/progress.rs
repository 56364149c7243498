use serde::Serialize;

use crate::models::BookingStatus;

pub const STAGES: [BookingStatus; 4] = [
    BookingStatus::Requested,
    BookingStatus::Confirmed,
    BookingStatus::InProgress,
    BookingStatus::Completed,
];

pub fn stage_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Requested => "Agendado",
        BookingStatus::Confirmed => "Confirmado",
        BookingStatus::InProgress => "Em Progresso",
        BookingStatus::Completed => "Concluído",
    }
}

pub fn is_stage_reached(status: BookingStatus, stage_index: usize) -> bool {
    status.stage_index() >= stage_index
}

pub fn progress_fraction(status: BookingStatus) -> f32 {
    match status {
        BookingStatus::Requested => 0.05,
        BookingStatus::Confirmed => 0.33,
        BookingStatus::InProgress => 0.66,
        BookingStatus::Completed => 1.0,
    }
}

#[derive(Debug, Serialize)]
pub struct StageView {
    pub status: BookingStatus,
    pub label: &'static str,
    pub reached: bool,
}

#[derive(Debug, Serialize)]
pub struct ProgressView {
    pub stages: Vec<StageView>,
    pub fraction: f32,
}

pub fn project(status: BookingStatus) -> ProgressView {
    ProgressView {
        stages: STAGES
            .iter()
            .enumerate()
            .map(|(idx, stage)| StageView {
                status: *stage,
                label: stage_label(*stage),
                reached: is_stage_reached(status, idx),
            })
            .collect(),
        fraction: progress_fraction(status),
    }
}
