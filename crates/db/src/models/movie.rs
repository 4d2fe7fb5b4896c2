//! Movie models and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use movies_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `movies` table.
///
/// `row_version` is the optimistic-concurrency token: reads hand it to the
/// client, and the update compare-and-swaps on it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub price: Decimal,
    pub rating: String,
    pub row_version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads and list output)
// ---------------------------------------------------------------------------

/// DTO for creating a new movie. `id` is store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub price: Decimal,
    pub rating: String,
}

/// DTO for updating an existing movie.
///
/// Carries the `id` of the record the caller believes it is editing (checked
/// against the path) and the `row_version` it read at edit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMovie {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub price: Decimal,
    pub rating: String,
    pub row_version: i64,
}

/// Query parameters for `GET /api/v1/movies`.
///
/// Absent or empty values impose no filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListParams {
    /// Substring to match against titles (case sensitivity per collation).
    pub title: Option<String>,
    /// Exact genre to match.
    pub genre: Option<String>,
}

/// Listing payload: the filter menu plus the current match set.
///
/// `genres` always covers the full table regardless of the active filters.
#[derive(Debug, Clone, Serialize)]
pub struct MovieCatalog {
    pub genres: Vec<String>,
    pub movies: Vec<Movie>,
}

/// Blank add-form payload returned by `GET /api/v1/movies/new`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MovieForm {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub price: Option<Decimal>,
    pub rating: Option<String>,
}
