use crate::shared::infrastructure::table_store::StoreError;
use thiserror::Error;

/// Every failure a handler can surface. The display strings are what callers match on.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Not a room member")]
    NotARoomMember,

    #[error("Already in a room")]
    AlreadyInRoom,

    #[error("Invalid invite code")]
    InvalidInviteCode,

    #[error("Already have a pending request")]
    AlreadyPendingRequest,

    #[error("No pending request")]
    NoPendingRequest,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
