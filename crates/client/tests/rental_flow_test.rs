mod common;

use canchas_client::RentalFlow;
use canchas_core::{
    errors::{ApiError, BookingError, FailureKind},
    mock::MockBackend,
    models::{
        booking::{CreateReservationRequest, CreatedReservation, ShirtColor},
        reservation::ReservationStatus,
        venue::PlayMode,
    },
    rental::RentalView,
};
use common::{into_api, ocean_venue, tennis_venue, today};
use pretty_assertions::assert_eq;

fn catalog_backend() -> MockBackend {
    let mut mock = MockBackend::new();
    mock.expect_list_venues()
        .times(1)
        .returning(|| Ok(vec![ocean_venue(), tennis_venue()]));
    mock
}

async fn flow_in_payment(mock: MockBackend, user_id: Option<&str>) -> RentalFlow {
    let mut flow = RentalFlow::new(into_api(mock), user_id.map(str::to_string));
    flow.load().await;
    flow.open_dialog("v1", today()).unwrap();

    let dialog = flow.dialog_mut().unwrap();
    dialog.select_court(1).unwrap();
    dialog.select_date(today()).unwrap();
    dialog.select_slot("11:00").unwrap();
    flow.complete_dialog().unwrap();
    flow
}

#[tokio::test]
async fn test_load_and_filter_catalog() {
    let mut flow = RentalFlow::new(into_api(catalog_backend()), None);
    flow.load().await;

    assert_eq!(flow.venues().len(), 2);
    assert_eq!(flow.load_error(), None);
    assert_eq!(flow.sports(), vec!["Fútbol", "Tenis"]);

    flow.set_sport(Some("Tenis".to_string()));
    assert_eq!(flow.locations(), vec!["Concón"]);
    assert!(flow.set_location(Some("Viña del Mar".to_string())).is_err());
    flow.set_location(Some("Concón".to_string())).unwrap();

    let names: Vec<&str> = flow.filtered().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Club Las Dunas"]);

    flow.set_sport(None);
    flow.set_mode(Some(PlayMode::Team));
    let names: Vec<&str> = flow.filtered().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Complejo El Océano"]);
}

#[tokio::test]
async fn test_load_failure_leaves_empty_catalog() {
    let mut mock = MockBackend::new();
    mock.expect_list_venues()
        .times(1)
        .returning(|| Err(ApiError::Network("connection refused".to_string())));

    let mut flow = RentalFlow::new(into_api(mock), None);
    flow.load().await;

    assert!(flow.venues().is_empty());
    assert!(flow.load_error().is_some());
}

#[tokio::test]
async fn test_successful_booking_reaches_confirmation() {
    let mut mock = catalog_backend();
    mock.expect_create_reservation()
        .withf(|request: &CreateReservationRequest| {
            request
                == &CreateReservationRequest {
                    enclosure: "v1".to_string(),
                    user: "u1".to_string(),
                    date: "2025-08-10T00:00:00.000Z".to_string(),
                    time: "11:00".to_string(),
                }
        })
        .times(1)
        .returning(|_| {
            Ok(CreatedReservation {
                id: "r9".to_string(),
                estado: ReservationStatus::Pending,
                time: Some("11:00".to_string()),
            })
        });

    let mut flow = flow_in_payment(mock, Some("u1")).await;
    assert_eq!(flow.view().name(), "pagando");
    assert!(flow.dialog().is_none());

    flow.pay().await.unwrap();

    match flow.view() {
        RentalView::Confirmado(confirmation) => {
            assert_eq!(confirmation.reservation.id, "r9");
            assert_eq!(confirmation.draft.court_label, "B");
            assert_eq!(
                confirmation.summary,
                "Reserva pendiente en Complejo El Océano (B) para el 10-08-2025 a las 11:00"
            );
        }
        other => panic!("expected confirmation, got {}", other.name()),
    }
    assert!(flow.failure().is_none());

    flow.reset().unwrap();
    assert_eq!(flow.view(), &RentalView::Lista);
}

#[tokio::test]
async fn test_rejected_booking_stays_in_payment() {
    let mut mock = catalog_backend();
    mock.expect_create_reservation().times(1).returning(|_| {
        Err(ApiError::Server {
            status: 400,
            message: Some("Horario ocupado".to_string()),
        })
    });

    let mut flow = flow_in_payment(mock, Some("u1")).await;
    let err = flow.pay().await.unwrap_err();

    assert!(matches!(err, BookingError::Api(ApiError::Server { status: 400, .. })));
    assert_eq!(flow.view().name(), "pagando");
    let failure = flow.failure().unwrap();
    assert_eq!(failure.kind, FailureKind::Server);
    assert_eq!(failure.message, "Horario ocupado");

    flow.cancel_payment().unwrap();
    assert_eq!(flow.view(), &RentalView::Lista);
    assert!(flow.failure().is_none());
}

#[tokio::test]
async fn test_missing_user_never_calls_backend() {
    let mut mock = catalog_backend();
    mock.expect_create_reservation().never();

    let mut flow = flow_in_payment(mock, None).await;
    let err = flow.pay().await.unwrap_err();

    assert!(matches!(err, BookingError::Api(ApiError::Request(_))));
    assert_eq!(flow.failure().unwrap().kind, FailureKind::Request);
    assert_eq!(flow.view().name(), "pagando");
}

#[tokio::test]
async fn test_payment_is_submitted_without_the_flow() {
    let mut mock = catalog_backend();
    mock.expect_create_reservation().times(1).returning(|_| {
        Ok(CreatedReservation {
            id: "r9".to_string(),
            estado: ReservationStatus::Pending,
            time: None,
        })
    });
    let mut flow = flow_in_payment(mock, Some("u1")).await;

    let payment = flow.begin_payment().unwrap();
    // The flow stays usable while the request is out
    flow.cancel_payment().unwrap();
    let result = payment.submit().await;
    assert!(result.is_ok());

    let err = flow.finish_payment(result).unwrap_err();
    assert!(matches!(err, BookingError::InvalidView(_)));
    assert_eq!(flow.view(), &RentalView::Lista);
}

#[tokio::test]
async fn test_begin_payment_outside_payment_view() {
    let mut mock = catalog_backend();
    mock.expect_create_reservation().never();
    let mut flow = RentalFlow::new(into_api(mock), Some("u1".to_string()));
    flow.load().await;

    assert!(matches!(flow.begin_payment(), Err(BookingError::InvalidView(_))));
}

#[tokio::test]
async fn test_finish_load_replaces_catalog() {
    let mut flow = RentalFlow::new(into_api(catalog_backend()), None);
    flow.load().await;

    flow.finish_load(Err(ApiError::Network("timeout".to_string())));
    assert!(flow.venues().is_empty());
    assert!(flow.load_error().is_some());

    flow.finish_load(Ok(vec![tennis_venue()]));
    assert_eq!(flow.venues().len(), 1);
    assert_eq!(flow.load_error(), None);
}

#[tokio::test]
async fn test_team_booking_requires_shirt_color() {
    let mut flow = RentalFlow::new(into_api(catalog_backend()), Some("u1".to_string()));
    flow.load().await;
    flow.set_mode(Some(PlayMode::Team));
    flow.open_dialog("v1", today()).unwrap();

    let dialog = flow.dialog_mut().unwrap();
    dialog.select_slot("10:00").unwrap();
    assert!(!dialog.can_confirm());
    assert!(flow.complete_dialog().is_err());
    assert_eq!(flow.view(), &RentalView::Lista);

    flow.dialog_mut().unwrap().select_color(ShirtColor::Azul).unwrap();
    flow.complete_dialog().unwrap();

    let checkout = flow.view().checkout().unwrap();
    assert_eq!(checkout.draft.shirt_color, Some(ShirtColor::Azul));
}

#[tokio::test]
async fn test_open_dialog_only_for_listed_venues() {
    let mut flow = RentalFlow::new(into_api(catalog_backend()), None);
    flow.load().await;
    flow.set_sport(Some("Tenis".to_string()));

    let err = flow.open_dialog("v1", today()).unwrap_err();
    assert!(matches!(err, BookingError::NotFound(_)));

    flow.close_dialog();
    assert!(flow.dialog().is_none());
}

#[tokio::test]
async fn test_pay_outside_payment_view_is_rejected() {
    let mut mock = MockBackend::new();
    mock.expect_create_reservation().never();

    let mut flow = RentalFlow::new(into_api(mock), Some("u1".to_string()));
    let err = flow.pay().await.unwrap_err();

    assert!(matches!(err, BookingError::InvalidView(ref path) if path == "lista -> confirmado"));
}
