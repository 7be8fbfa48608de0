use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("phone number needs at least {min} digits, got {got}")]
    PhoneTooShort { min: usize, got: usize },
    #[error("failed to encode lead: {0}")]
    Encode(#[from] serde_json::Error),
}
