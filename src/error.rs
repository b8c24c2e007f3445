use thiserror::Error;

use crate::api::ApiError;

/// Failure of one operator action. Each action reports its own failure once;
/// nothing is fatal to the process.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Network(ApiError),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not authorized: {0}")]
    Authorization(String),
}

impl From<ApiError> for ActionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized { status } => {
                ActionError::Authorization(format!("server refused with HTTP {}", status))
            }
            ApiError::Rejected { body, .. } => ActionError::Validation(body),
            other => ActionError::Network(other),
        }
    }
}
