//! Handlers for the movie catalog.
//!
//! One handler per user action: filtered listing, details, edit read/write,
//! delete confirm/execute, and the add form read/write. Field validation
//! failures echo the submitted payload back for redisplay; an id mismatch on
//! edit is treated as "wrong target" and reported as not-found.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use movies_core::error::CoreError;
use movies_core::movie::validate_movie_fields;
use movies_core::types::DbId;
use movies_db::models::movie::{
    CreateMovie, Movie, MovieCatalog, MovieForm, MovieListParams, UpdateMovie,
};
use movies_db::repositories::{MovieRepo, UpdateOutcome};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up a movie, mapping absence to a 404 domain error.
async fn ensure_movie_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Movie> {
    MovieRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
}

// ---------------------------------------------------------------------------
// GET /movies
// ---------------------------------------------------------------------------

/// List movies matching the optional title-substring and exact-genre filters.
///
/// The genre menu always covers the full table, independent of the filters.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<impl IntoResponse> {
    let genres = MovieRepo::distinct_genres(&state.pool).await?;
    let movies = MovieRepo::list_filtered(&state.pool, &params).await?;
    tracing::debug!(count = movies.len(), "Listed movies");
    Ok(Json(DataResponse {
        data: MovieCatalog { genres, movies },
    }))
}

// ---------------------------------------------------------------------------
// GET /movies/new
// ---------------------------------------------------------------------------

/// Blank add-form payload.
pub async fn new_movie_form() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: MovieForm::default(),
    }))
}

// ---------------------------------------------------------------------------
// POST /movies
// ---------------------------------------------------------------------------

/// Create a new movie. The store assigns the ID.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    if let Err(err) = validate_movie_fields(&input.title, &input.genre, &input.rating, input.price)
    {
        return Err(AppError::rejected(err, &input));
    }

    let created = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, title = %created.title, "Movie created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /movies/{id}
// ---------------------------------------------------------------------------

/// Get a single movie by ID.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = ensure_movie_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: movie }))
}

// ---------------------------------------------------------------------------
// GET /movies/{id}/edit
// ---------------------------------------------------------------------------

/// Read a movie for editing.
///
/// Same contract as the details read; no lock is taken. The response carries
/// `row_version`, which the subsequent write must send back.
pub async fn get_movie_for_edit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = ensure_movie_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: movie }))
}

// ---------------------------------------------------------------------------
// PUT /movies/{id}
// ---------------------------------------------------------------------------

/// Replace all mutable fields of a movie.
///
/// The commit compare-and-swaps on `row_version`. On a conflict the row is
/// re-checked: if it was deleted the result downgrades to not-found,
/// otherwise the conflict is surfaced as-is with no retry.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    // Wrong target, reported the same way as a missing one.
    if id != input.id {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }));
    }

    if let Err(err) = validate_movie_fields(&input.title, &input.genre, &input.rating, input.price)
    {
        return Err(AppError::rejected(err, &input));
    }

    match MovieRepo::update(&state.pool, &input).await? {
        UpdateOutcome::Updated(updated) => {
            tracing::info!(id = updated.id, "Movie updated");
            Ok(Json(DataResponse { data: updated }))
        }
        UpdateOutcome::Conflict => {
            if !MovieRepo::exists(&state.pool, id).await? {
                Err(AppError::Core(CoreError::NotFound {
                    entity: "Movie",
                    id,
                }))
            } else {
                tracing::warn!(id, "Concurrent modification detected on update");
                Err(AppError::Core(CoreError::Conflict(format!(
                    "Movie {id} was modified by another request"
                ))))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// GET /movies/{id}/delete
// ---------------------------------------------------------------------------

/// Read a movie for delete confirmation. Pure read, details semantics.
pub async fn confirm_delete_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = ensure_movie_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: movie }))
}

// ---------------------------------------------------------------------------
// DELETE /movies/{id}
// ---------------------------------------------------------------------------

/// Delete a movie. Idempotent: an absent row is already satisfied.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Movie deleted");
    } else {
        tracing::debug!(id, "Delete requested for absent movie");
    }
    Ok(StatusCode::NO_CONTENT)
}
