//! # Booking Commands
//!
//! The "Book Now" button on the salon detail screen.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  book_appointment(&catalog, salon_id, selected_service)                 │
//! │       │                                                                 │
//! │       ├── no service picked?      ──► VALIDATION_ERROR                 │
//! │       │                               "Please select a service to book" │
//! │       ├── unknown salon?          ──► NOT_FOUND                         │
//! │       ├── salon lacks service?    ──► BOOKING_ERROR                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BookingConfirmation { reference, salonName, service, message }         │
//! │                                                                         │
//! │  The appointment list is not written to. A booking shows up only as   │
//! │  its confirmation.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use salon_core::catalog::find_salon;
use salon_core::validation::validate_service_selection;
use salon_core::CoreError;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Returned when a booking goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    /// Random v4 UUID
    pub reference: String,
    pub salon_name: String,
    pub service: String,
    /// Alert text
    pub message: String,
}

/// Books `selected_service` at the salon with id `salon_id`.
///
/// ## Errors
/// - `VALIDATION_ERROR` if no service is selected
/// - `NOT_FOUND` if the salon does not exist
/// - `BOOKING_ERROR` if the salon does not offer the service
pub fn book_appointment(
    catalog: &CatalogState,
    salon_id: &str,
    selected_service: Option<&str>,
) -> Result<BookingConfirmation, ApiError> {
    debug!(salon_id = %salon_id, service = ?selected_service, "book_appointment command");

    let service = validate_service_selection(selected_service).map_err(|e| {
        warn!(error = %e, "Booking rejected");
        e
    })?;

    let salon = find_salon(catalog.salons(), salon_id)?;
    if !salon.offers(service) {
        warn!(salon = %salon.name, service = %service, "Service not offered");
        return Err(CoreError::ServiceNotOffered {
            salon: salon.name.clone(),
            service: service.to_string(),
        }
        .into());
    }

    let confirmation = BookingConfirmation {
        reference: Uuid::new_v4().to_string(),
        salon_name: salon.name.clone(),
        service: service.to_string(),
        message: format!(
            "Your appointment at {} for {} has been booked!",
            salon.name, service
        ),
    };

    info!(
        reference = %confirmation.reference,
        salon = %salon.name,
        service = %service,
        "Appointment booked"
    );

    Ok(confirmation)
}
