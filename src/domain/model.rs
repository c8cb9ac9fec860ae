use crate::utils::error::{NameSorterError, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

pub const MIN_GIVEN_NAMES: usize = 1;
pub const MAX_GIVEN_NAMES: usize = 3;

/// A person's name: one to three given names followed by a last name.
///
/// Equality and hashing use `full_name` only, compared exactly (case matters).
#[derive(Debug, Clone)]
pub struct Name {
    given_names: Vec<String>,
    last_name: String,
    full_name: String,
}

impl Name {
    pub fn new<I, S>(given_names: I, last_name: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let given_names: Vec<String> = given_names.into_iter().map(Into::into).collect();

        Self::validate_given_names(&given_names)?;
        Self::validate_last_name(last_name)?;

        let full_name = Self::build_full_name(&given_names, last_name);

        Ok(Self {
            given_names,
            last_name: last_name.to_string(),
            full_name,
        })
    }

    fn validate_given_names(given_names: &[String]) -> Result<()> {
        if given_names.len() < MIN_GIVEN_NAMES || given_names.len() > MAX_GIVEN_NAMES {
            return Err(NameSorterError::validation(format!(
                "A name must have at least {} given name and may have up to {} given names.",
                MIN_GIVEN_NAMES, MAX_GIVEN_NAMES
            )));
        }

        if given_names.iter().any(|name| name.trim().is_empty()) {
            return Err(NameSorterError::validation(
                "Given names cannot be empty or whitespace.",
            ));
        }

        Ok(())
    }

    fn validate_last_name(last_name: &str) -> Result<()> {
        if last_name.trim().is_empty() {
            return Err(NameSorterError::validation(
                "Last name cannot be empty or whitespace.",
            ));
        }
        Ok(())
    }

    fn build_full_name(given_names: &[String], last_name: &str) -> String {
        let mut parts: Vec<&str> = given_names.iter().map(String::as_str).collect();
        parts.push(last_name);
        parts.join(" ")
    }

    pub fn given_names(&self) -> &[String] {
        &self.given_names
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}
