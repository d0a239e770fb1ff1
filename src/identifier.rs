//! Namespaced identifiers (`namespace:path`) used for item kinds, block kinds,
//! barrel kinds and recipe ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BreweryError;

/// Namespace assumed when the text has no `namespace:` prefix
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A `namespace:path` identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Build an identifier from parts, returning None if either part is malformed
    pub fn new(namespace: &str, path: &str) -> Option<Self> {
        if !valid_namespace(namespace) || !valid_path(path) {
            return None;
        }
        Some(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Build from parts known to be well formed
    pub(crate) fn from_parts(namespace: &str, path: &str) -> Self {
        debug_assert!(valid_namespace(namespace) && valid_path(path));
        Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        }
    }

    /// Parse `namespace:path` or a bare `path` in the default namespace
    pub fn try_parse(s: &str) -> Option<Self> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Same namespace, different path
    pub fn with_path(&self, path: &str) -> Option<Self> {
        Self::new(&self.namespace, path)
    }
}

fn valid_namespace(s: &str) -> bool {
    s.chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-'))
}

fn valid_path(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-' | '/'))
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = BreweryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| BreweryError::InvalidIdentifier(s.to_string()))
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_namespace() {
        let id = Identifier::try_parse("brewery:drinks/ale").unwrap();
        assert_eq!(id.namespace(), "brewery");
        assert_eq!(id.path(), "drinks/ale");
        assert_eq!(id.to_string(), "brewery:drinks/ale");
    }

    #[test]
    fn test_parse_default_namespace() {
        let id = Identifier::try_parse("fire").unwrap();
        assert_eq!(id.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(id.path(), "fire");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Identifier::try_parse("").is_none());
        assert!(Identifier::try_parse("Brewery:ale").is_none());
        assert!(Identifier::try_parse("brewery:ale beer").is_none());
        assert!(Identifier::try_parse("a:b:c").is_none());
        assert!("brewery:".parse::<Identifier>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let id = Identifier::try_parse("brewery:ale").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"brewery:ale\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
