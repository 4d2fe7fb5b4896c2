pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                  list (GET), create (POST)
/// /movies/new              blank add form (GET)
/// /movies/{id}             details (GET), edit write (PUT), delete execute (DELETE)
/// /movies/{id}/edit        edit read (GET)
/// /movies/{id}/delete      delete confirm (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
