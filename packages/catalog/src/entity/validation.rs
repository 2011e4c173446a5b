//! Field rules shared by the record kinds.

use crate::error::{CatalogError, Result};

/// Collects violated rules so they can be reported in one error.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` unless `ok` holds.
    pub fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.0.push(message.into());
        }
    }

    pub fn into_result(self) -> Result<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation(self.0))
        }
    }
}

/// Non-blank text of at most `max` characters.
pub fn is_valid_text(value: &str, max: usize) -> bool {
    !value.trim().is_empty() && value.chars().count() <= max
}

/// `local@domain.tld`: exactly one `@`, a non-empty local part and a domain
/// with a `.` that is neither its first nor its last character.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

pub fn is_valid_latitude(latitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude)
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    (-180.0..=180.0).contains(&longitude)
}

pub fn is_valid_rating(rating: i64) -> bool {
    (1..=5).contains(&rating)
}
