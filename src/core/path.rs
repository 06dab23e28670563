//! Property paths naming the field an error refers to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path used for errors about the record as a whole.
pub const ROOT: &str = "root";

/// Identifier of the field (or the whole record) an error refers to.
///
/// A path is never empty: an empty name collapses to [`ROOT`].
///
/// # Example
///
/// ```rust
/// use intake::core::PropertyPath;
///
/// assert_eq!(PropertyPath::new("email").as_str(), "email");
/// assert_eq!(PropertyPath::new(""), PropertyPath::root());
/// assert!(PropertyPath::root().is_root());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PropertyPath(String);

impl PropertyPath {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            Self::root()
        } else {
            Self(name)
        }
    }

    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyPath {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PropertyPath {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<PropertyPath> for String {
    fn from(path: PropertyPath) -> Self {
        path.0
    }
}

impl AsRef<str> for PropertyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_becomes_root() {
        assert!(PropertyPath::new("").is_root());
        assert!(PropertyPath::from(String::new()).is_root());
    }

    #[test]
    fn named_paths_are_kept_verbatim() {
        let path = PropertyPath::from("firstName");

        assert!(!path.is_root());
        assert_eq!(path.to_string(), "firstName");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&PropertyPath::new("email")).unwrap();
        assert_eq!(json, "\"email\"");
    }

    #[test]
    fn deserializing_empty_string_gives_root() {
        let path: PropertyPath = serde_json::from_str("\"\"").unwrap();

        assert!(path.is_root());
        assert_eq!(path.as_str(), "root");
    }

    #[test]
    fn deserializes_named_path() {
        let path: PropertyPath = serde_json::from_str("\"lastName\"").unwrap();

        assert_eq!(path, PropertyPath::new("lastName"));
    }
}
