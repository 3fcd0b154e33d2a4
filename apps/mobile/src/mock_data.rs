//! # Mock Catalog Data
//!
//! The static salon and appointment tables the app ships with. There is no
//! backend; these are the whole catalog.
//!
//! Rows are plain tuples so the tables read like the price lists they
//! came from. `salons()` and `appointments()` turn them into domain types.

use chrono::{NaiveDate, NaiveTime};

use salon_core::{Appointment, AppointmentStatus, Money, PriceTier, Salon};

/// (id, name, rating, reviews, km, address, open h, close h, tier, description, services)
type SalonRow = (
    &'static str,
    &'static str,
    f64,
    u32,
    f64,
    &'static str,
    u32,
    u32,
    PriceTier,
    &'static str,
    &'static [&'static str],
);

const SALONS: &[SalonRow] = &[
    (
        "1",
        "Glow Studio",
        4.8,
        124,
        1.2,
        "123 Main Street, Downtown",
        9,
        20,
        PriceTier::Moderate,
        "A bright, modern studio for cuts, color and a quick spa break.",
        &["Haircut", "Hair Coloring", "Spa", "Makeup"],
    ),
    (
        "2",
        "Serenity Spa & Wellness",
        4.9,
        89,
        2.5,
        "45 Lakeview Avenue",
        10,
        21,
        PriceTier::Premium,
        "Full-day spa with massage suites, facials and a quiet lounge.",
        &["Massage", "Facial", "Spa", "Body Scrub"],
    ),
    (
        "3",
        "Nail Bar Deluxe",
        4.6,
        203,
        0.8,
        "9 Market Square",
        9,
        19,
        PriceTier::Budget,
        "Walk-in friendly nail bar with a long list of gel colors.",
        &["Manicure", "Pedicure", "Nail Art", "Gel Nails"],
    ),
    (
        "4",
        "The Barber Room",
        4.7,
        156,
        3.1,
        "210 Oak Street",
        8,
        18,
        PriceTier::Budget,
        "Classic barbershop: clipper cuts, beard work and hot towel shaves.",
        &["Haircut", "Beard Trim", "Hot Towel Shave"],
    ),
    (
        "5",
        "Bella Makeup Studio",
        4.5,
        67,
        4.0,
        "77 Rose Boulevard",
        11,
        20,
        PriceTier::Premium,
        "Event and bridal makeup by appointment, plus brows and lashes.",
        &["Makeup", "Bridal Makeup", "Eyebrow Threading", "Lash Extensions"],
    ),
];

/// (id, salon, service, y, m, d, hour, minute, price $, status)
type AppointmentRow = (
    &'static str,
    &'static str,
    &'static str,
    i32,
    u32,
    u32,
    u32,
    u32,
    i64,
    AppointmentStatus,
);

const APPOINTMENTS: &[AppointmentRow] = &[
    ("1", "Glow Studio", "Haircut", 2024, 12, 15, 10, 0, 45, AppointmentStatus::Upcoming),
    ("2", "Serenity Spa & Wellness", "Massage", 2024, 12, 20, 14, 30, 80, AppointmentStatus::Upcoming),
    ("3", "Nail Bar Deluxe", "Manicure", 2024, 11, 28, 11, 0, 35, AppointmentStatus::Completed),
    ("4", "Glow Studio", "Hair Coloring", 2024, 11, 10, 15, 0, 120, AppointmentStatus::Completed),
];

/// The salon catalog, in display order.
pub fn salons() -> Vec<Salon> {
    SALONS
        .iter()
        .map(
            |&(id, name, rating, reviews, km, address, open, close, tier, description, services)| {
                Salon {
                    id: id.to_string(),
                    name: name.to_string(),
                    rating,
                    review_count: reviews,
                    distance_km: km,
                    address: address.to_string(),
                    open_time: clock(open, 0),
                    close_time: clock(close, 0),
                    price_tier: tier,
                    description: description.to_string(),
                    image_url: format!("https://picsum.photos/seed/salon-{}/400/300", id),
                    services: services.iter().map(|s| s.to_string()).collect(),
                }
            },
        )
        .collect()
}

/// The user's appointments, upcoming first.
pub fn appointments() -> Vec<Appointment> {
    APPOINTMENTS
        .iter()
        .map(
            |&(id, salon, service, y, m, d, hour, minute, dollars, status)| Appointment {
                id: id.to_string(),
                salon_name: salon.to_string(),
                service: service.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                time: clock(hour, minute),
                price: Money::from_dollars(dollars),
                status,
            },
        )
        .collect()
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
