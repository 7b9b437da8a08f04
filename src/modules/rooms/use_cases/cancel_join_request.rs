use tracing::{debug, info};

use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::infrastructure::table_store::TableStore;

pub async fn cancel_join_request(
    store: &dyn TableStore,
    caller: &Caller,
) -> Result<(), ApplicationError> {
    let user_id = caller.require()?;

    let mut tx = store.begin().await?;
    let Some(request) = tx.find_pending_request_by_user(user_id).await? else {
        debug!(%user_id, "cancel rejected: no pending request");
        return Err(ApplicationError::NoPendingRequest);
    };
    tx.delete_join_request(&request.id).await?;
    tx.commit().await?;

    info!(request_id = %request.id, %user_id, "join request cancelled");
    Ok(())
}
