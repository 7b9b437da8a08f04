use axum::{
    Extension, Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::modules::expenses::adapters::inbound::http as expenses_http;
use crate::modules::rooms::adapters::inbound::http as rooms_http;
use crate::modules::users::adapters::inbound::http as users_http;
use crate::shared::core::errors::ApplicationError;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .merge(users_http::routes())
        .merge(rooms_http::routes())
        .merge(expenses_http::routes())
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ApplicationError::NotARoomMember => StatusCode::FORBIDDEN,
            ApplicationError::AlreadyInRoom | ApplicationError::AlreadyPendingRequest => {
                StatusCode::CONFLICT
            }
            ApplicationError::InvalidInviteCode | ApplicationError::NoPendingRequest => {
                StatusCode::NOT_FOUND
            }
            ApplicationError::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Malformed bodies never reach a handler; they answer 422 like any other invalid argument.
pub fn invalid_body(rejection: JsonRejection) -> ApplicationError {
    ApplicationError::InvalidArgument(rejection.body_text())
}
