// The identity boundary as seen by handlers.
//
// Authentication itself happens upstream. By the time a request reaches a handler the only
// question left is "who is calling, if anyone", which is what Caller answers.

use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller(Option<UserId>);

impl Caller {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn user(user_id: impl Into<UserId>) -> Self {
        Self(Some(user_id.into()))
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.0.as_ref()
    }

    /// Mutations call this first; queries use `user_id` and degrade to an empty result instead.
    pub fn require(&self) -> Result<&UserId, ApplicationError> {
        self.0.as_ref().ok_or(ApplicationError::NotAuthenticated)
    }
}

impl From<Option<UserId>> for Caller {
    fn from(user_id: Option<UserId>) -> Self {
        Self(user_id)
    }
}
