//! Custom error types for the order flow

use reqwest::StatusCode;
use thiserror::Error;

pub const PAYMENT_FALLBACK_MESSAGE: &str = "Errore creazione pagamento";

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("ERRORE: Carica prima il tuo logo")]
    MissingFile,

    #[error("ERRORE: Attendi la scansione del file")]
    ScanPending,

    #[error("File non valido: {file_name} - {reason}")]
    InvalidFile {
        file_name: String,
        reason: String,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    #[error("{message}")]
    PaymentRejected {
        status: StatusCode,
        message: String,
    },

    #[error("Nessun URL di pagamento ricevuto")]
    MissingCheckoutUrl,

    #[error("Invalid price tier table: {reason}")]
    InvalidTierTable {
        reason: String,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type CheckoutResult<T> = Result<T, CheckoutError>;

impl CheckoutError {
    /// Whether the failure happened before the submit button was disabled.
    pub fn is_gating(&self) -> bool {
        matches!(self, CheckoutError::MissingFile | CheckoutError::ScanPending)
    }

    /// Text shown in the form status line.
    pub fn status_text(&self) -> String {
        if self.is_gating() {
            self.to_string()
        } else {
            format!("ERRORE. {}", self)
        }
    }
}
