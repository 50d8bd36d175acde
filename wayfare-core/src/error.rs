/// Failure taxonomy shared by every backend service call.
///
/// Callers branch on the variant to pick the right compensating action:
/// an optimistic favorite add is reverted on `Unauthenticated`, while a
/// remove that comes back `NotFound` is treated as already done.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    InvalidResponse(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
