#![allow(dead_code)]

use canchas_core::models::{
    reservation::{Reservation, ReservationStatus, UserRef, VenueRef},
    venue::{BookingMode, Court, Venue},
};
use chrono::{NaiveDate, TimeZone, Utc};

pub fn court(label: &str, slots: &str) -> Court {
    Court {
        label: label.to_string(),
        count: 1,
        time_slots: Court::parse_slots(slots),
        materials: String::new(),
    }
}

pub fn venue(id: &str, sport: &str, location: &str, mode: Option<BookingMode>) -> Venue {
    Venue {
        id: id.to_string(),
        name: format!("Recinto {id}"),
        sport: sport.to_string(),
        max_players: 10,
        hourly_cost: 25000,
        description: String::new(),
        materials: String::new(),
        location: location.to_string(),
        parking: false,
        vests: false,
        referees: false,
        services: vec![],
        image: None,
        courts: vec![court("Pasto sintético", "10:00,11:00")],
        mode,
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
            name: "Complejo El Océano".to_string(),
            admin: None,
        },
        user: user.map(|(name, last_name)| UserRef {
            id: format!("u-{id}"),
            name: name.to_string(),
            last_name: last_name.to_string(),
            email: format!("{}@test.com", name.to_lowercase()),
        }),
        date: Utc.with_ymd_and_hms(2025, 8, 12, 19, 0, 0).unwrap(),
        time: "19:00".to_string(),
        estado: status,
        created_at: None,
        updated_at: None,
    }
}
