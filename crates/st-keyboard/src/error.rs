use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeyboardError>;

/// Errors surfaced by the ST keyboard link and its control lines.
///
/// Hardware backends report their failures as strings so the driver stays independent of any
/// particular HAL error type.
#[derive(Debug, Error)]
pub enum KeyboardError {
    #[error("unsupported baud rate {0}")]
    UnsupportedBaud(u32),

    #[error("serial link not configured")]
    NotConfigured,

    #[error("serial link error: {0}")]
    Serial(String),

    #[error("{line} line error: {msg}")]
    Pin { line: &'static str, msg: String },
}
