//! Repository for the `movies` table.
//!
//! Provides the six catalog operations: filtered listing (with the distinct
//! genre set for the filter menu), lookup by id, create, concurrency-checked
//! update, idempotent delete, and an existence check.

use sqlx::{PgPool, Postgres, QueryBuilder};

use movies_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, MovieListParams, UpdateMovie};

/// Column list for `movies` queries.
const MOVIE_COLUMNS: &str = "\
    id, title, release_date, genre, price, rating, \
    row_version, created_at, updated_at";

/// Outcome of a concurrency-checked update.
///
/// `Conflict` means the compare-and-swap matched no row: either the record
/// was changed since it was read (stale `row_version`) or it no longer
/// exists. The caller disambiguates via [`MovieRepo::exists`].
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(Movie),
    Conflict,
}

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies matching the supplied filters, in stable `id` order.
    ///
    /// Predicates are appended only for filters that were actually supplied:
    /// a title filter matches as a substring (LIKE wildcards in the term are
    /// escaped so they match literally), a genre filter matches exactly.
    pub async fn list_filtered(
        pool: &PgPool,
        params: &MovieListParams,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE 1 = 1"));

        if let Some(title) = params.title.as_deref().filter(|s| !s.is_empty()) {
            query.push(" AND title LIKE ");
            query.push_bind(contains_pattern(title));
        }
        if let Some(genre) = params.genre.as_deref().filter(|s| !s.is_empty()) {
            query.push(" AND genre = ");
            query.push_bind(genre.to_string());
        }
        query.push(" ORDER BY id");

        query.build_query_as::<Movie>().fetch_all(pool).await
    }

    /// Distinct set of genres across the full table, sorted ascending.
    ///
    /// Always unfiltered -- the filter menu shows every genre present.
    pub async fn distinct_genres(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT genre FROM movies ORDER BY genre")
            .fetch_all(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// True iff a movie with the given ID is currently present.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Insert a new movie. The store assigns the ID.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, release_date, genre, price, rating) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {MOVIE_COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(&input.genre)
            .bind(input.price)
            .bind(&input.rating)
            .fetch_one(pool)
            .await
    }

    /// Replace all mutable fields of a movie in one atomic statement.
    ///
    /// Compare-and-swaps on `row_version`: the write only lands if the row
    /// still carries the version the caller read. A miss is reported as
    /// [`UpdateOutcome::Conflict`] without retrying.
    pub async fn update(pool: &PgPool, input: &UpdateMovie) -> Result<UpdateOutcome, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                 title = $2, \
                 release_date = $3, \
                 genre = $4, \
                 price = $5, \
                 rating = $6, \
                 row_version = row_version + 1, \
                 updated_at = now() \
             WHERE id = $1 AND row_version = $7 \
             RETURNING {MOVIE_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Movie>(&query)
            .bind(input.id)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(&input.genre)
            .bind(input.price)
            .bind(&input.rating)
            .bind(input.row_version)
            .fetch_optional(pool)
            .await?;

        Ok(match updated {
            Some(movie) => UpdateOutcome::Updated(movie),
            None => UpdateOutcome::Conflict,
        })
    }

    /// Delete a movie by ID.
    ///
    /// Returns `true` if a row was removed. Deleting an absent row is not an
    /// error -- the caller treats it as already satisfied.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `LIKE` substring pattern, escaping wildcards in the search term
/// so `%`, `_`, and `\` match literally.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_wraps_in_wildcards() {
        assert_eq!(contains_pattern("Alpha"), "%Alpha%");
    }

    #[test]
    fn contains_pattern_escapes_percent() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
    }

    #[test]
    fn contains_pattern_escapes_underscore() {
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
    }

    #[test]
    fn contains_pattern_escapes_backslash_first() {
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
