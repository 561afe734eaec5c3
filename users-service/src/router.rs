//! Route table

use axum::{routing::get, Router};

use crate::{
    handlers::{create_user, delete_user, get_user, health, list_users, readiness, update_user},
    middleware,
    repository::UserRepository,
    state::AppState,
};

/// Build the application router
///
/// `/api/users` routes map onto the CRUD handlers; `/health` and `/ready`
/// are the probes. The response middleware wraps every route.
pub fn build_router<R: UserRepository>(state: AppState<R>) -> Router {
    let api = Router::new()
        .route("/users", get(list_users::<R>).post(create_user::<R>))
        .route(
            "/users/{id}",
            get(get_user::<R>)
                .put(update_user::<R>)
                .delete(delete_user::<R>),
        );

    let app = Router::new()
        .nest("/api", api)
        .route("/health", get(health::<R>))
        .route("/ready", get(readiness::<R>))
        .with_state(state);

    middleware::apply(app)
}
