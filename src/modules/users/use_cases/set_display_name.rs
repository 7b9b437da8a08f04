use tracing::info;

use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::infrastructure::table_store::TableStore;

#[derive(Debug, Clone)]
pub struct SetDisplayName {
    pub display_name: String,
}

/// Overwrites the caller's display name. Any string is accepted, including an empty one.
pub async fn set_display_name(
    store: &dyn TableStore,
    caller: &Caller,
    command: SetDisplayName,
) -> Result<(), ApplicationError> {
    let user_id = caller.require()?;
    let mut tx = store.begin().await?;
    tx.upsert_user_display_name(user_id, command.display_name)
        .await?;
    tx.commit().await?;
    info!(%user_id, "display name set");
    Ok(())
}
