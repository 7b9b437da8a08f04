use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::users::use_cases::get_current_user_id::get_current_user_id;
use crate::modules::users::use_cases::get_display_name::get_display_name;
use crate::modules::users::use_cases::set_display_name::{SetDisplayName, set_display_name};
use crate::shell::graphql::caller;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UsersQuery;

#[Object]
impl UsersQuery {
    async fn get_current_user_id(&self, context: &Context<'_>) -> Option<ID> {
        get_current_user_id(&caller(context)).map(|user_id| ID(user_id.to_string()))
    }

    async fn get_display_name(&self, context: &Context<'_>) -> GqlResult<Option<String>> {
        let state = context.data_unchecked::<AppState>();
        Ok(get_display_name(state.store.as_ref(), &caller(context)).await?)
    }
}

#[derive(Default)]
pub struct UsersMutation;

#[Object]
impl UsersMutation {
    async fn set_display_name(
        &self,
        context: &Context<'_>,
        display_name: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        set_display_name(
            state.store.as_ref(),
            &caller(context),
            SetDisplayName { display_name },
        )
        .await?;
        Ok(true)
    }
}
