use std::fmt;

use crate::error::ConfigError;

/// Identifies which remote resource collection to fetch, e.g. `/lecture-materials`.
///
/// Only constructible through [`Locator::new`], so a held value is always
/// non-empty, rooted at `/` and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ConfigError::EmptyLocator);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceInLocator(value));
        }
        if !value.starts_with('/') {
            return Err(ConfigError::UnrootedLocator(value));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Locator {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_rooted_path() {
        let locator = Locator::new("/lecture-materials").unwrap();
        assert_eq!(locator.as_str(), "/lecture-materials");
        assert_eq!(locator.to_string(), "/lecture-materials");
    }

    #[test]
    fn test_accepts_query_string() {
        assert!(Locator::try_from("/lecture-materials?subject=math").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Locator::new(""), Err(ConfigError::EmptyLocator));
    }

    #[test]
    fn test_rejects_unrooted() {
        assert_eq!(
            Locator::new("lecture-materials"),
            Err(ConfigError::UnrootedLocator("lecture-materials".to_string()))
        );
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(matches!(
            Locator::new("/lecture materials"),
            Err(ConfigError::WhitespaceInLocator(_))
        ));
        assert!(matches!(
            Locator::new("  "),
            Err(ConfigError::WhitespaceInLocator(_))
        ));
    }
}
