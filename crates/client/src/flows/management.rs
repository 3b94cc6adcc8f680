use std::sync::Arc;
use std::time::Duration;

use canchas_core::{
    api::BookingApi,
    board::ReservationBoard,
    errors::{ApiError, BookingError, BookingResult},
    models::reservation::{Decision, ReservationUpdate},
};
use tokio::{
    sync::RwLock,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

/// Reservation management for one administrator.
///
/// Clones share the same board, so a background refresh and the operator's actions see
/// one list. The board lock is never held across a backend call.
#[derive(Clone)]
pub struct ManagementFlow {
    api: Arc<dyn BookingApi>,
    admin_id: Option<String>,
    board: Arc<RwLock<ReservationBoard>>,
}

impl ManagementFlow {
    pub fn new(api: Arc<dyn BookingApi>, admin_id: Option<String>) -> Self {
        Self {
            api,
            admin_id,
            board: Arc::new(RwLock::new(ReservationBoard::new())),
        }
    }

    pub fn board(&self) -> Arc<RwLock<ReservationBoard>> {
        self.board.clone()
    }

    fn admin_id(&self) -> Result<&str, ApiError> {
        self.admin_id.as_deref().ok_or_else(|| {
            ApiError::Request("no hay un administrador configurado (CANCHAS_ADMIN_ID)".to_string())
        })
    }

    /// Fetch the administrator's reservations into the board.
    pub async fn refresh(&self) -> BookingResult<()> {
        self.board.write().await.begin_loading();

        let result = match self.admin_id() {
            Ok(admin_id) => self.api.list_admin_reservations(admin_id).await,
            Err(e) => Err(e),
        };

        let mut board = self.board.write().await;
        match result {
            Ok(reservations) => {
                debug!("Fetched {} reservations", reservations.len());
                board.finish_loading(Ok(reservations));
                Ok(())
            }
            Err(e) => {
                error!("Error loading reservations: {}", e);
                board.finish_loading(Err(e.user_message()));
                Err(e.into())
            }
        }
    }

    pub async fn request_action(&self, id: &str, decision: Decision) -> BookingResult<String> {
        let mut board = self.board.write().await;
        let action = board.request_action(id, decision)?;
        Ok(action.prompt())
    }

    pub async fn cancel_action(&self) {
        self.board.write().await.cancel_action();
    }

    /// Patch the pending action's reservation and apply the server's answer in place.
    ///
    /// Failures show a banner and close the dialog; the list is left as it was.
    pub async fn confirm_action(&self) -> BookingResult<ReservationUpdate> {
        let action = self
            .board
            .read()
            .await
            .pending_action()
            .cloned()
            .ok_or_else(|| BookingError::Validation("No hay una acción pendiente".to_string()))?;

        let target = action.decision.target();
        let result = self
            .api
            .update_reservation_status(&action.reservation.id, target)
            .await;

        let mut board = self.board.write().await;
        match result {
            Ok(updated) => {
                info!("Reservation {} is now {}", updated.id, updated.estado);
                board.apply_update(&updated);
                Ok(updated)
            }
            Err(e) => {
                error!("Error updating reservation {}: {}", action.reservation.id, e);
                board.fail_action(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Refetch every `period` until the returned task is cancelled or dropped.
    ///
    /// The first run happens one period from now; callers do the initial fetch.
    pub fn spawn_refresh(&self, period: Duration) -> RefreshTask {
        let period = period.max(Duration::from_millis(1));
        let flow = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                // Errors already land on the board.
                let _ = flow.refresh().await;
            }
        });
        RefreshTask { handle }
    }
}

/// Handle of a periodic refresh; aborts the task when dropped.
#[derive(Debug)]
pub struct RefreshTask {
    handle: JoinHandle<()>,
}

impl RefreshTask {
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
