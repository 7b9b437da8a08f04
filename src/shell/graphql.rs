use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::expenses::adapters::inbound::graphql::{ExpensesMutation, ExpensesQuery};
use crate::modules::rooms::adapters::inbound::graphql::{RoomsMutation, RoomsQuery};
use crate::modules::users::adapters::inbound::graphql::{UsersMutation, UsersQuery};
use crate::shared::core::identity::Caller;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(UsersQuery, RoomsQuery, ExpensesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(UsersMutation, RoomsMutation, ExpensesMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

/// The caller attached to the request by `graphql`; anonymous when none was attached.
pub fn caller(context: &Context<'_>) -> Caller {
    context.data_opt::<Caller>().cloned().unwrap_or_default()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    caller: Caller,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(caller)).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
