use std::sync::Arc;

use canchas_client::{ManagementFlow, RentalFlow};
use canchas_core::{
    api::BookingApi,
    board::Tab,
    errors::BookingError,
    mock::MockBackend,
    models::{
        reservation::{Reservation, ReservationStatus, VenueRef},
        venue::{BookingMode, Court, Venue},
    },
    rental::RentalView,
};
use canchas_discord_bot::{
    handlers::{arrendar, reservas},
    screens::{arrendar as rental_ids, reservas as board_ids, ANY},
};
use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
}

fn venue(id: &str, sport: &str, location: &str) -> Venue {
    Venue {
        id: id.to_string(),
        name: format!("Recinto {id}"),
        sport: sport.to_string(),
        max_players: 10,
        hourly_cost: 20000,
        description: String::new(),
        materials: String::new(),
        location: location.to_string(),
        parking: false,
        vests: false,
        referees: false,
        services: vec![],
        image: None,
        courts: vec![
            Court {
                label: "A".to_string(),
                count: 1,
                time_slots: Court::parse_slots("10:00,11:00"),
                materials: String::new(),
            },
            Court {
                label: "B".to_string(),
                count: 1,
                time_slots: Court::parse_slots("18:00"),
                materials: String::new(),
            },
        ],
        mode: Some(BookingMode::Both),
    }
}

async fn loaded_flow() -> RentalFlow {
    let mut mock = MockBackend::new();
    mock.expect_list_venues().times(1).returning(|| {
        Ok(vec![
            venue("v1", "Fútbol", "Viña del Mar"),
            venue("v2", "Tenis", "Concón"),
        ])
    });
    let api: Arc<dyn BookingApi> = Arc::new(mock);
    let mut flow = RentalFlow::new(api, Some("u1".to_string()));
    flow.load().await;
    flow
}

#[tokio::test]
async fn test_rental_selections_reach_payment() {
    let mut flow = loaded_flow().await;

    arrendar::apply(&mut flow, rental_ids::SPORT, Some("Tenis"), today()).unwrap();
    arrendar::apply(&mut flow, rental_ids::LOCATION, Some("Concón"), today()).unwrap();
    assert_eq!(flow.filtered().len(), 1);

    arrendar::apply(&mut flow, rental_ids::VENUE, Some("v2"), today()).unwrap();
    arrendar::apply(&mut flow, rental_ids::COURT, Some("1"), today()).unwrap();
    arrendar::apply(&mut flow, rental_ids::DATE, Some("2025-08-12"), today()).unwrap();
    arrendar::apply(&mut flow, rental_ids::SLOT, Some("18:00"), today()).unwrap();
    arrendar::apply(&mut flow, rental_ids::CONFIRM, None, today()).unwrap();

    let checkout = flow.view().checkout().unwrap();
    assert_eq!(checkout.draft.court_label, "B");
    assert_eq!(checkout.draft.date, NaiveDate::from_ymd_opt(2025, 8, 12).unwrap());

    arrendar::apply(&mut flow, rental_ids::CANCEL, None, today()).unwrap();
    assert_eq!(flow.view(), &RentalView::Lista);
}

#[tokio::test]
async fn test_rental_any_clears_filter() {
    let mut flow = loaded_flow().await;

    arrendar::apply(&mut flow, rental_ids::SPORT, Some("Tenis"), today()).unwrap();
    arrendar::apply(&mut flow, rental_ids::SPORT, Some(ANY), today()).unwrap();

    assert_eq!(flow.filter().sport(), None);
    assert_eq!(flow.filtered().len(), 2);
}

#[tokio::test]
async fn test_rental_rejects_bad_input() {
    let mut flow = loaded_flow().await;

    let err = arrendar::apply(&mut flow, rental_ids::SLOT, Some("10:00"), today()).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    arrendar::apply(&mut flow, rental_ids::VENUE, Some("v1"), today()).unwrap();
    let err = arrendar::apply(&mut flow, rental_ids::DATE, Some("2025-08-09"), today()).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    let err = arrendar::apply(&mut flow, rental_ids::SLOT, None, today()).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    let err = arrendar::apply(&mut flow, "arrendar:otro", None, today()).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    arrendar::apply(&mut flow, rental_ids::CLOSE, None, today()).unwrap();
    assert!(flow.dialog().is_none());
}

fn pending(id: &str) -> Reservation {
    Reservation {
        id: id.to_string(),
        enclosure: VenueRef {
            id: "v1".to_string(),
            name: "Recinto v1".to_string(),
            admin: None,
        },
        user: None,
        date: Utc.with_ymd_and_hms(2025, 8, 13, 17, 0, 0).unwrap(),
        time: "17:00".to_string(),
        estado: ReservationStatus::Pending,
        created_at: None,
        updated_at: None,
    }
}

#[tokio::test]
async fn test_board_interactions() {
    let mut mock = MockBackend::new();
    mock.expect_list_admin_reservations()
        .times(1)
        .returning(|_| Ok(vec![pending("r1")]));
    mock.expect_update_reservation_status().never();
    let api: Arc<dyn BookingApi> = Arc::new(mock);
    let flow = ManagementFlow::new(api, Some("a1".to_string()));
    flow.refresh().await.unwrap();

    reservas::apply(&flow, &board_ids::tab_id(Tab::All), None).await.unwrap();
    assert_eq!(flow.board().read().await.tab(), Tab::All);

    reservas::apply(&flow, board_ids::ACCEPT, Some("r1")).await.unwrap();
    assert!(flow.board().read().await.pending_action().is_some());

    reservas::apply(&flow, board_ids::CANCEL, None).await.unwrap();
    assert!(flow.board().read().await.pending_action().is_none());

    let err = reservas::apply(&flow, board_ids::REJECT, None).await.unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    let err = reservas::apply(&flow, "reservas:tab:otras", None).await.unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}
