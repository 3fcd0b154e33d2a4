//! # Catalog State
//!
//! Wraps the salon and appointment tables the screens read from.
//!
//! ## Thread Safety
//! Read-only after construction. Booking does not write back to the
//! appointment list, so no lock is needed.

use salon_core::catalog::AppointmentGroups;
use salon_core::{Appointment, Salon};

use crate::mock_data;

/// The catalog the app was started with.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    salons: Vec<Salon>,
    appointments: Vec<Appointment>,
}

impl CatalogState {
    pub fn new(salons: Vec<Salon>, appointments: Vec<Appointment>) -> Self {
        CatalogState {
            salons,
            appointments,
        }
    }

    /// The catalog the app ships with.
    pub fn mock() -> Self {
        CatalogState::new(mock_data::salons(), mock_data::appointments())
    }

    /// All salons, in display order.
    pub fn salons(&self) -> &[Salon] {
        &self.salons
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Appointments split into upcoming and past.
    pub fn appointment_groups(&self) -> AppointmentGroups {
        AppointmentGroups::partition(&self.appointments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_catalog_is_populated() {
        let catalog = CatalogState::mock();
        assert_eq!(catalog.salons().len(), 5);
        assert_eq!(catalog.salons()[0].name, "Glow Studio");

        let groups = catalog.appointment_groups();
        assert_eq!(groups.upcoming.len(), 2);
        assert_eq!(groups.past.len(), 2);
        assert_eq!(groups.len(), catalog.appointments().len());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CatalogState::default();
        assert!(catalog.salons().is_empty());
        assert!(catalog.appointment_groups().is_empty());
    }
}
