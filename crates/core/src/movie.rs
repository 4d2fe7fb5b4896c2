//! Field constraints for movie records.
//!
//! The same rules apply on create and update; `id` is store-assigned and
//! never validated here. Validators return [`CoreError::Validation`] with a
//! message suitable for redisplaying next to the offending field.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Maximum movie title length in characters.
pub const MAX_TITLE_LEN: usize = 256;

/// Maximum genre length in characters.
pub const MAX_GENRE_LEN: usize = 64;

/// Maximum rating length in characters (e.g. `"PG-13"`).
pub const MAX_RATING_LEN: usize = 16;

/// Validate a movie title: non-blank and within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title too long: {} chars (max {MAX_TITLE_LEN})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate a genre: non-blank and within length limit.
pub fn validate_genre(genre: &str) -> Result<(), CoreError> {
    if genre.trim().is_empty() {
        return Err(CoreError::Validation(
            "Genre must not be empty".to_string(),
        ));
    }
    if genre.len() > MAX_GENRE_LEN {
        return Err(CoreError::Validation(format!(
            "Genre too long: {} chars (max {MAX_GENRE_LEN})",
            genre.len()
        )));
    }
    Ok(())
}

/// Validate a rating grade: non-blank and within length limit.
pub fn validate_rating(rating: &str) -> Result<(), CoreError> {
    if rating.trim().is_empty() {
        return Err(CoreError::Validation(
            "Rating must not be empty".to_string(),
        ));
    }
    if rating.len() > MAX_RATING_LEN {
        return Err(CoreError::Validation(format!(
            "Rating too long: {} chars (max {MAX_RATING_LEN})",
            rating.len()
        )));
    }
    Ok(())
}

/// Validate a price: must not be negative.
pub fn validate_price(price: Decimal) -> Result<(), CoreError> {
    if price.is_sign_negative() {
        return Err(CoreError::Validation(format!(
            "Price must not be negative, got {price}"
        )));
    }
    Ok(())
}

/// Validate the full set of mutable movie fields.
///
/// Returns the first violation encountered, in field order.
pub fn validate_movie_fields(
    title: &str,
    genre: &str,
    rating: &str,
    price: Decimal,
) -> Result<(), CoreError> {
    validate_title(title)?;
    validate_genre(genre)?;
    validate_rating(rating)?;
    validate_price(price)?;
    Ok(())
}
