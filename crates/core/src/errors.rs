use thiserror::Error;

use crate::models::reservation::ReservationStatus;

/// Failure of a single backend call, classified by where it went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered, but rejected the request.
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("sin detalle"))]
    Server { status: u16, message: Option<String> },

    /// No response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be built, so nothing was sent.
    #[error("Request error: {0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Coarse classification used when rendering an error to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Server,
    Network,
    Request,
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Server { .. } | ApiError::InvalidResponse(_) => FailureKind::Server,
            ApiError::Network(_) => FailureKind::Network,
            ApiError::Request(_) => FailureKind::Request,
        }
    }

    /// Message meant for an end user.
    ///
    /// A server-supplied message is passed through untouched; every other case gets a
    /// distinct fixed prefix so the three kinds can be told apart.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } => message.clone(),
            ApiError::Server { status, message: None } => {
                format!("El servidor rechazó la solicitud (código {status}).")
            }
            ApiError::InvalidResponse(_) => {
                "El servidor respondió con datos inválidos.".to_string()
            }
            ApiError::Network(_) => {
                "No se recibió respuesta del servidor. Revisa tu conexión e inténtalo de nuevo."
                    .to_string()
            }
            ApiError::Request(detail) => format!("No se pudo preparar la solicitud: {detail}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },

    #[error("Invalid view transition: {0}")]
    InvalidView(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl BookingError {
    /// Text shown next to the control that failed.
    pub fn user_message(&self) -> String {
        match self {
            BookingError::Api(err) => err.user_message(),
            BookingError::Validation(message) => message.clone(),
            BookingError::NotFound(what) => format!("{what} no existe o ya no está disponible"),
            BookingError::InvalidTransition { from, .. } => {
                format!("La reserva ya fue gestionada (estado: {from})")
            }
            other => other.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub type BookingResult<T> = Result<T, BookingError>;
