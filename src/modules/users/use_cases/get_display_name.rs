use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::infrastructure::table_store::TableStore;

pub async fn get_display_name(
    store: &dyn TableStore,
    caller: &Caller,
) -> Result<Option<String>, ApplicationError> {
    let Some(user_id) = caller.user_id() else {
        return Ok(None);
    };
    let mut tx = store.begin().await?;
    let user = tx.get_user(user_id).await?;
    Ok(user.and_then(|user| user.display_name))
}
