use canchas_core::board::{LoadState, ReservationBoard, TableView, Tab};
use canchas_core::display::USER_UNAVAILABLE;
use canchas_core::errors::BookingError;
use canchas_core::models::reservation::{Decision, ReservationStatus, ReservationUpdate};
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

use common::reservation;

fn loaded_board() -> ReservationBoard {
    let mut board = ReservationBoard::new();
    board.begin_loading();
    board.finish_loading(Ok(vec![
        reservation("1", ReservationStatus::Pending, Some(("Juan", "Perez"))),
        reservation("2", ReservationStatus::Confirmed, Some(("Ana", "Gómez"))),
        reservation("3", ReservationStatus::Rejected, Some(("Pedro", "Pascal"))),
        reservation("4", ReservationStatus::Pending, None),
    ]));
    board
}

fn visible_ids(board: &ReservationBoard) -> Vec<String> {
    board.visible().into_iter().map(|r| r.id.clone()).collect()
}

#[rstest]
#[case(Tab::Pending, vec!["1", "4"])]
#[case(Tab::Confirmed, vec!["2"])]
#[case(Tab::Rejected, vec!["3"])]
#[case(Tab::All, vec!["1", "2", "3", "4"])]
fn test_tabs_filter_by_status(#[case] tab: Tab, #[case] expected: Vec<&str>) {
    let mut board = loaded_board();
    board.select_tab(tab);

    assert_eq!(visible_ids(&board), expected);
}

#[test]
fn test_reselecting_tab_is_pure() {
    let mut board = loaded_board();
    board.select_tab(Tab::Pending);
    let first = visible_ids(&board);

    board.select_tab(Tab::All);
    board.select_tab(Tab::Pending);
    board.select_tab(Tab::Pending);

    assert_eq!(visible_ids(&board), first);
    assert_eq!(board.reservations().len(), 4);
}

#[test]
fn test_loading_and_error_suppress_rows() {
    let mut board = loaded_board();

    board.begin_loading();
    assert_eq!(board.table(), TableView::Loading);

    board.finish_loading(Err("Network error".to_string()));
    assert_eq!(board.table(), TableView::Error("Network error"));
    assert_eq!(board.state(), &LoadState::Failed("Network error".to_string()));
}

#[test]
fn test_request_action_only_for_pending() {
    let mut board = loaded_board();

    let err = board.request_action("2", Decision::Reject).unwrap_err();
    assert!(matches!(
        err,
        BookingError::InvalidTransition {
            from: ReservationStatus::Confirmed,
            to: ReservationStatus::Rejected
        }
    ));
    assert!(board.pending_action().is_none());

    assert!(matches!(
        board.request_action("99", Decision::Accept),
        Err(BookingError::NotFound(_))
    ));

    let action = board.request_action("1", Decision::Accept).unwrap();
    assert_eq!(action.decision, Decision::Accept);
}

#[test]
fn test_prompt_names_user_or_placeholder() {
    let mut board = loaded_board();

    let prompt = board.request_action("1", Decision::Accept).unwrap().prompt();
    assert_eq!(
        prompt,
        "¿Estás seguro de que deseas aceptar la reserva de Juan Perez para el recinto Complejo El Océano el 12-08-2025 a las 19:00?"
    );

    let prompt = board.request_action("4", Decision::Reject).unwrap().prompt();
    assert!(prompt.contains(USER_UNAVAILABLE));
    assert!(prompt.contains("rechazar"));
}

#[test]
fn test_apply_update_changes_row_in_place() {
    let mut board = loaded_board();
    board.request_action("1", Decision::Accept).unwrap();

    board.apply_update(&ReservationUpdate {
        id: "1".to_string(),
        estado: ReservationStatus::Confirmed,
        updated_at: None,
    });

    assert_eq!(board.find("1").unwrap().estado, ReservationStatus::Confirmed);
    assert!(board.find("1").unwrap().updated_at.is_some());
    assert!(board.pending_action().is_none());
    assert_eq!(visible_ids(&board), vec!["4"]);
    assert_eq!(board.reservations().len(), 4);
}

#[test]
fn test_fail_action_keeps_rows() {
    let mut board = loaded_board();
    board.request_action("1", Decision::Reject).unwrap();

    board.fail_action("Horario ocupado".to_string());

    assert_eq!(board.banner(), Some("Horario ocupado"));
    assert!(board.pending_action().is_none());
    assert_eq!(board.find("1").unwrap().estado, ReservationStatus::Pending);
    assert!(matches!(board.table(), TableView::Rows(_)));
}

#[test]
fn test_banner_survives_reload_until_dismissed() {
    let mut board = loaded_board();
    board.fail_action("boom".to_string());

    board.begin_loading();
    board.finish_loading(Ok(vec![]));
    assert_eq!(board.banner(), Some("boom"));

    board.dismiss_banner();
    assert_eq!(board.banner(), None);
}

#[test]
fn test_cancel_action_closes_dialog() {
    let mut board = loaded_board();
    board.request_action("4", Decision::Accept).unwrap();

    board.cancel_action();

    assert!(board.pending_action().is_none());
    assert_eq!(board.find("4").unwrap().estado, ReservationStatus::Pending);
}

#[rstest]
#[case("pendientes", Some(Tab::Pending))]
#[case("todas", Some(Tab::All))]
#[case("otras", None)]
fn test_tab_keys(#[case] key: &str, #[case] expected: Option<Tab>) {
    assert_eq!(Tab::from_key(key), expected);
}
