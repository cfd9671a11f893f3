//! Command identifiers
//!
//! Every command is registered under an [`Identifier`]: the lowercase,
//! underscore-separated name used to invoke it and to name its completion
//! functions. Identifiers are declared explicitly at registration time.
//!
//! [`to_snake_case`] converts a Rust type name (`UserCreate`, `HTTPServer`)
//! into that form. It is used by [`Identifier::from_type_name`] to migrate
//! existing command types to explicit identifiers.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Convert a type name into `snake_case`
///
/// Words are split at non-alphanumeric separators, at lowercase/digit to
/// uppercase transitions, and before the last capital of an acronym run that
/// is followed by a lowercase letter. Acronyms therefore collapse into one
/// word:
///
/// ```
/// use cadre_core::to_snake_case;
///
/// assert_eq!(to_snake_case("serve"), "serve");
/// assert_eq!(to_snake_case("UserCreate"), "user_create");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();

    for segment in name.split(|c: char| !c.is_alphanumeric()) {
        if segment.is_empty() {
            continue;
        }

        let chars: Vec<char> = segment.chars().collect();
        let mut current = String::with_capacity(segment.len());

        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && c.is_uppercase() {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());

                // "userCreate" | "http2Server" | "HTTPServer" (split before 'S')
                if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower)
                {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.extend(c.to_lowercase());
        }

        if !current.is_empty() {
            words.push(current);
        }
    }

    words.join("_")
}

/// Canonical name of a registered command
///
/// An identifier is non-empty, starts with an ASCII lowercase letter and
/// contains only ASCII lowercase letters, digits, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier from an explicitly declared name
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifier` if the name breaks the identifier rules.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Derive an identifier from a Rust type name
    ///
    /// Module paths and generic arguments are stripped before conversion, so
    /// `app::cmd::UserCreate` and `Wrapper<Inner>` become `user_create` and
    /// `wrapper`. Intended for generating identifiers for existing command
    /// types, e.g. from the output of `std::any::type_name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifier` if the converted name is not a valid
    /// identifier (empty, starts with a digit, non-ASCII characters).
    pub fn from_type_name(type_name: &str) -> Result<Self> {
        let without_generics = type_name.split('<').next().unwrap_or(type_name);
        let base = without_generics
            .rsplit("::")
            .next()
            .unwrap_or(without_generics)
            .trim();

        let snake = to_snake_case(base);
        validate(&snake).map_err(|_| Error::InvalidIdentifier {
            name: type_name.to_string(),
            reason: "type name does not convert to a valid identifier",
        })?;
        Ok(Self(snake))
    }

    /// Get the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(Error::InvalidIdentifier {
            name: name.to_string(),
            reason,
        })
    };

    let Some(first) = name.chars().next() else {
        return invalid("identifier is empty");
    };
    if !first.is_ascii_lowercase() {
        return invalid("must start with a lowercase ASCII letter");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        return invalid("only lowercase ASCII letters, digits, '_' and '-' are allowed");
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_snake_case_single_word_is_lowercased() {
        assert_eq!(to_snake_case("serve"), "serve");
        assert_eq!(to_snake_case("Serve"), "serve");
        assert_eq!(to_snake_case("SERVE"), "serve");
    }

    #[test]
    fn test_snake_case_camel_compound() {
        assert_eq!(to_snake_case("UserCreate"), "user_create");
        assert_eq!(to_snake_case("userCreate"), "user_create");
        assert_eq!(to_snake_case("MigrateDatabaseCommand"), "migrate_database_command");
    }

    #[test]
    fn test_snake_case_leading_acronym_collapses() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("IOError"), "io_error");
    }

    #[test]
    fn test_snake_case_inner_and_trailing_acronyms() {
        assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
        assert_eq!(to_snake_case("ServeHTTP"), "serve_http");
        assert_eq!(to_snake_case("getHTTPResponse"), "get_http_response");
    }

    #[test]
    fn test_snake_case_digits() {
        assert_eq!(to_snake_case("Http2Server"), "http2_server");
        assert_eq!(to_snake_case("Base64"), "base64");
    }

    #[test]
    fn test_snake_case_separators() {
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("kebab-case-name"), "kebab_case_name");
        assert_eq!(to_snake_case("__Leading"), "leading");
        assert_eq!(to_snake_case("two  spaces"), "two_spaces");
    }

    #[test]
    fn test_snake_case_is_deterministic() {
        for name in ["UserCreate", "HTTPServer", "serve", "XMLHttpRequest"] {
            assert_eq!(to_snake_case(name), to_snake_case(name));
        }
    }

    #[test]
    fn test_identifier_new_accepts_valid_names() {
        assert_eq!(Identifier::new("serve").unwrap().as_str(), "serve");
        assert_eq!(Identifier::new("user_create").unwrap().as_str(), "user_create");
        assert_eq!(Identifier::new("self-update2").unwrap().as_str(), "self-update2");
    }

    #[test]
    fn test_identifier_new_rejects_invalid_names() {
        for bad in ["", "Serve", "2fast", "_hidden", "has space", "ünïcode"] {
            let err = Identifier::new(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidIdentifier { .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_identifier_from_type_name_strips_path_and_generics() {
        let id = Identifier::from_type_name("my_app::cmd::UserCreate").unwrap();
        assert_eq!(id.as_str(), "user_create");

        let id = Identifier::from_type_name("Wrapper<my_app::Inner>").unwrap();
        assert_eq!(id.as_str(), "wrapper");

        let id = Identifier::from_type_name("HTTPServer").unwrap();
        assert_eq!(id.as_str(), "http_server");
    }

    #[test]
    fn test_identifier_from_type_name_rejects_unconvertible() {
        assert!(Identifier::from_type_name("2Fast").is_err());
        assert!(Identifier::from_type_name("::").is_err());
    }

    #[test]
    fn test_identifier_from_std_type_name() {
        struct UserDelete;
        let _ = UserDelete;
        let id = Identifier::from_type_name(std::any::type_name::<UserDelete>()).unwrap();
        assert_eq!(id.as_str(), "user_delete");
    }

    #[test]
    fn test_identifier_parse_and_display() {
        let id: Identifier = "serve".parse().unwrap();
        assert_eq!(id.to_string(), "serve");
        assert!("Serve".parse::<Identifier>().is_err());
    }

    #[test]
    fn test_identifier_deserialize_validates() {
        #[derive(Deserialize)]
        struct Doc {
            id: Identifier,
        }

        let doc: Doc = toml::from_str(r#"id = "user_create""#).unwrap();
        assert_eq!(doc.id.as_str(), "user_create");

        assert!(toml::from_str::<Doc>(r#"id = "UserCreate""#).is_err());
    }
}
