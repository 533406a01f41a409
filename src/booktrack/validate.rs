//! # Record Validation
//!
//! Turns a raw `Title:Author:ISBN:Copies` line into a [`Book`] or says why it
//! cannot. Checks run in a fixed order and the first failure wins:
//!
//! 1. field count (exactly four, trailing empty fields included)
//! 2. title non-empty after trim
//! 3. author non-empty after trim
//! 4. ISBN is exactly 13 ASCII digits
//! 5. copies parses as an integer and is positive
//!
//! Nothing here touches the filesystem or the metrics.

use crate::error::ValidationError;
use crate::model::{Book, FIELD_SEPARATOR};
use once_cell::sync::Lazy;
use regex::Regex;

static ISBN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{13}$").unwrap());

/// Whether `s` is a bare 13 digit ISBN. No trimming is applied.
pub fn is_isbn(s: &str) -> bool {
    ISBN_RE.is_match(s)
}

/// Number of colon separated fields in `s`, counting empty ones.
pub fn field_count(s: &str) -> usize {
    s.split(FIELD_SEPARATOR).count()
}

pub fn validate(line: &str) -> Result<Book, ValidationError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [title, author, isbn, copies] = fields.as_slice() else {
        return Err(ValidationError::malformed("Invalid field count."));
    };

    if title.is_empty() {
        return Err(ValidationError::malformed("Title is empty."));
    }
    if author.is_empty() {
        return Err(ValidationError::malformed("Author is empty."));
    }
    if !is_isbn(isbn) {
        return Err(ValidationError::InvalidIsbn(
            "ISBN must be exactly 13 digits.".to_string(),
        ));
    }

    let copies: i32 = copies
        .parse()
        .map_err(|_| ValidationError::malformed("Copies must be an integer."))?;
    if copies <= 0 {
        return Err(ValidationError::malformed("Copies must be positive."));
    }

    Ok(Book::new(
        title.to_string(),
        author.to_string(),
        isbn.to_string(),
        copies as u32,
    ))
}
