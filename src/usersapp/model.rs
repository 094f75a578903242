use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated user record. Only built through [`UserCandidate::validate`].
///
/// `name` is kept exactly as typed so that removal by the same text finds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: f64,
}

/// Raw operator input for a new user.
///
/// `age` is `None` when the typed text was not a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserCandidate {
    pub name: String,
    pub age: Option<f64>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Age must be a number")]
    NonNumericAge,

    #[error("Age must be greater than zero, got {0}")]
    NonPositiveAge(f64),

    #[error("Age {0} is out of range")]
    AgeOutOfRange(f64),
}

impl UserCandidate {
    pub fn new(name: impl Into<String>, age: Option<f64>) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Builds a candidate from the two answers of the add prompt.
    pub fn from_input(name: &str, age: &str) -> Self {
        Self::new(name, parse_age(age))
    }

    pub fn validate(&self) -> Result<User, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let age = self.age.ok_or(ValidationError::NonNumericAge)?;
        if age.is_nan() {
            return Err(ValidationError::NonNumericAge);
        }
        if age <= 0.0 {
            return Err(ValidationError::NonPositiveAge(age));
        }
        if age.is_infinite() {
            return Err(ValidationError::AgeOutOfRange(age));
        }

        Ok(User {
            name: self.name.clone(),
            age,
        })
    }
}

/// Parses an age answer as a decimal number; `None` when the text isn't one.
///
/// Integers too large for any integer type still parse, and overflow past `f64`
/// comes back as infinity for [`UserCandidate::validate`] to reject.
pub fn parse_age(input: &str) -> Option<f64> {
    input.trim().parse().ok()
}
