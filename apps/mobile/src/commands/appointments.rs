//! # Appointment Commands

use serde::Serialize;
use tracing::debug;

use salon_core::{Appointment, AppointmentStatus};

use crate::state::CatalogState;

/// Appointment card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: String,
    pub salon_name: String,
    pub service: String,
    /// e.g. "Dec 15, 2024"
    pub date_label: String,
    /// e.g. "10:00 AM"
    pub time_label: String,
    /// e.g. "$45"
    pub price_label: String,
    pub status: AppointmentStatus,
    pub status_label: &'static str,
}

impl From<&Appointment> for AppointmentDto {
    fn from(a: &Appointment) -> Self {
        AppointmentDto {
            id: a.id.clone(),
            salon_name: a.salon_name.clone(),
            service: a.service.clone(),
            date_label: a.date_label(),
            time_label: a.time_label(),
            price_label: a.price.display_whole(),
            status: a.status,
            status_label: a.status.label(),
        }
    }
}

/// Appointments screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentsResponse {
    pub upcoming: Vec<AppointmentDto>,
    pub past: Vec<AppointmentDto>,
    /// True when the screen should show its empty state
    pub is_empty: bool,
}

/// Lists appointments split into upcoming and past.
pub fn list_appointments(catalog: &CatalogState) -> AppointmentsResponse {
    debug!("list_appointments command");
    let groups = catalog.appointment_groups();

    AppointmentsResponse {
        is_empty: groups.is_empty(),
        upcoming: groups.upcoming.iter().map(AppointmentDto::from).collect(),
        past: groups.past.iter().map(AppointmentDto::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_mock_appointments() {
        let response = list_appointments(&CatalogState::mock());
        assert!(!response.is_empty);
        assert_eq!(response.upcoming.len(), 2);
        assert_eq!(response.past.len(), 2);

        let first = &response.upcoming[0];
        assert_eq!(first.salon_name, "Glow Studio");
        assert_eq!(first.date_label, "Dec 15, 2024");
        assert_eq!(first.time_label, "10:00 AM");
        assert_eq!(first.price_label, "$45");
        assert_eq!(first.status_label, "Upcoming");

        assert!(response
            .past
            .iter()
            .all(|a| a.status == AppointmentStatus::Completed));
    }

    #[test]
    fn test_empty_state() {
        let response = list_appointments(&CatalogState::default());
        assert!(response.is_empty);
        assert!(response.upcoming.is_empty() && response.past.is_empty());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let response = list_appointments(&CatalogState::mock());
        let json = serde_json::to_value(&response.past[0]).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["salonName"], "Nail Bar Deluxe");
    }
}
