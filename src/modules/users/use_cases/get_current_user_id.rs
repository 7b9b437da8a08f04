use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::UserId;

pub fn get_current_user_id(caller: &Caller) -> Option<UserId> {
    caller.user_id().cloned()
}
