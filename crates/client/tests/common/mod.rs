#![allow(dead_code)]

use std::sync::Arc;

use canchas_core::{
    api::BookingApi,
    mock::MockBackend,
    models::{
        reservation::{Reservation, ReservationStatus, UserRef, VenueRef},
        venue::{BookingMode, Court, Venue},
    },
};
use chrono::{NaiveDate, TimeZone, Utc};

pub fn into_api(mock: MockBackend) -> Arc<dyn BookingApi> {
    Arc::new(mock)
}

pub fn court(label: &str, slots: &str) -> Court {
    Court {
        label: label.to_string(),
        count: 1,
        time_slots: Court::parse_slots(slots),
        materials: String::new(),
    }
}

/// Two courts with the same slots, the shape of the usual booking walkthrough.
pub fn ocean_venue() -> Venue {
    Venue {
        id: "v1".to_string(),
        name: "Complejo El Océano".to_string(),
        sport: "Fútbol".to_string(),
        max_players: 14,
        hourly_cost: 25000,
        description: "Canchas junto al mar".to_string(),
        materials: String::new(),
        location: "Viña del Mar".to_string(),
        parking: true,
        vests: true,
        referees: false,
        services: vec!["Camarines".to_string()],
        image: None,
        courts: vec![court("A", "10:00,11:00"), court("B", "10:00,11:00")],
        mode: Some(BookingMode::Both),
    }
}

pub fn tennis_venue() -> Venue {
    Venue {
        id: "v2".to_string(),
        name: "Club Las Dunas".to_string(),
        sport: "Tenis".to_string(),
        location: "Concón".to_string(),
        courts: vec![court("Arcilla", "09:00")],
        mode: Some(BookingMode::Solo),
        ..ocean_venue()
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
}

pub fn reservation(id: &str, status: ReservationStatus, user: Option<(&str, &str)>) -> Reservation {
    Reservation {
        id: id.to_string(),
        enclosure: VenueRef {
            id: "v1".to_string(),
            name: "Dunas de Concón".to_string(),
            admin: None,
        },
        user: user.map(|(name, last_name)| UserRef {
            id: format!("u-{id}"),
            name: name.to_string(),
            last_name: last_name.to_string(),
            email: format!("{}@test.com", name.to_lowercase()),
        }),
        date: Utc.with_ymd_and_hms(2025, 8, 13, 17, 0, 0).unwrap(),
        time: "17:00".to_string(),
        estado: status,
        created_at: None,
        updated_at: None,
    }
}
