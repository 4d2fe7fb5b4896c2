//! Route definitions for the movie catalog, mounted at `/movies`.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie catalog routes.
///
/// ```text
/// GET    /              -> list_movies (?title=&genre=)
/// POST   /              -> create_movie
/// GET    /new           -> new_movie_form
/// GET    /{id}          -> get_movie
/// PUT    /{id}          -> update_movie
/// DELETE /{id}          -> delete_movie
/// GET    /{id}/edit     -> get_movie_for_edit
/// GET    /{id}/delete   -> confirm_delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route("/new", get(movies::new_movie_form))
        .route(
            "/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route("/{id}/edit", get(movies::get_movie_for_edit))
        .route("/{id}/delete", get(movies::confirm_delete_movie))
}
