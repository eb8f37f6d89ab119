use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredcheckError {
    #[error("configuration error: {0}")]
    Config(String),
}

pub type CredcheckResult<T> = Result<T, CredcheckError>;

/// Terminal outcome of a failed check cycle. `Display` is the exact text
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Please enter article text")]
    EmptyInput,

    #[error("{0}")]
    ServiceRejected(String),

    #[error("Failed to connect to server: {0}")]
    TransportFailure(String),
}

impl CheckError {
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::EmptyInput => "empty_input",
            CheckError::ServiceRejected(_) => "service_rejected",
            CheckError::TransportFailure(_) => "transport_failure",
        }
    }
}
