//! Metadata scope parsing and user-key validation
//!
//! All scope strings accepted by the public API funnel through
//! [`MetadataScope::parse`]; anything the parser rejects never reaches the
//! wire.

use crate::error::{Result, StorageError};

/// Maximum length of a user metadata key.
pub const USER_KEY_MAX_LEN: usize = 32;

/// Validated metadata scope selector.
///
/// Produced by [`MetadataScope::parse`] from the string form used on the API
/// surface (`"user"`, `"user.<key>"`, `"exif"`, `"gpano"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataScope {
    /// All caller-defined metadata under the `user` namespace
    User,
    /// A single caller-defined key under the `user` namespace
    UserKey(String),
    /// Camera EXIF metadata
    Exif,
    /// Photo-sphere (GPano) metadata
    Gpano,
}

impl MetadataScope {
    /// Parse a scope string, rejecting anything outside the fixed variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use provider_mstorage::MetadataScope;
    ///
    /// assert_eq!(MetadataScope::parse("user").unwrap(), MetadataScope::User);
    /// assert_eq!(
    ///     MetadataScope::parse("user.key1").unwrap(),
    ///     MetadataScope::UserKey("key1".to_string())
    /// );
    /// assert!(MetadataScope::parse("bogus").is_err());
    /// ```
    pub fn parse(scope: &str) -> Result<Self> {
        match scope {
            "user" => Ok(MetadataScope::User),
            "exif" => Ok(MetadataScope::Exif),
            "gpano" => Ok(MetadataScope::Gpano),
            _ => match scope.strip_prefix("user.") {
                Some(key) if is_valid_user_key(key) => {
                    Ok(MetadataScope::UserKey(key.to_string()))
                }
                _ => Err(StorageError::parameter(format!(
                    "invalid metadata scope: {scope}"
                ))),
            },
        }
    }

    /// Path segment under `/media/{id}/meta`.
    pub(crate) fn meta_path(&self) -> String {
        match self {
            MetadataScope::User => "user".to_string(),
            MetadataScope::UserKey(key) => format!("user/{key}"),
            MetadataScope::Exif => "exif".to_string(),
            MetadataScope::Gpano => "gpano".to_string(),
        }
    }
}

/// Check a bare user metadata key: 1-32 characters from `[A-Za-z0-9_-]`.
pub fn is_valid_user_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= USER_KEY_MAX_LEN
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_scopes() {
        assert_eq!(MetadataScope::parse("user").unwrap(), MetadataScope::User);
        assert_eq!(MetadataScope::parse("exif").unwrap(), MetadataScope::Exif);
        assert_eq!(MetadataScope::parse("gpano").unwrap(), MetadataScope::Gpano);
    }

    #[test]
    fn test_parse_user_key() {
        assert_eq!(
            MetadataScope::parse("user.key1").unwrap(),
            MetadataScope::UserKey("key1".to_string())
        );
        assert_eq!(
            MetadataScope::parse("user.a-B_9").unwrap(),
            MetadataScope::UserKey("a-B_9".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_unknown_scope() {
        assert!(MetadataScope::parse("bogus").is_err());
        assert!(MetadataScope::parse("").is_err());
        assert!(MetadataScope::parse("USER").is_err());
        assert!(MetadataScope::parse("user.").is_err());
        assert!(MetadataScope::parse("user.bad key").is_err());
        assert!(MetadataScope::parse("user.k.y").is_err());
    }

    #[test]
    fn test_user_key_length_bounds() {
        let max = "k".repeat(32);
        assert!(is_valid_user_key(&max));
        assert!(MetadataScope::parse(&format!("user.{max}")).is_ok());

        let too_long = "k".repeat(33);
        assert!(!is_valid_user_key(&too_long));
        assert!(MetadataScope::parse(&format!("user.{too_long}")).is_err());
    }

    #[test]
    fn test_meta_path() {
        assert_eq!(MetadataScope::User.meta_path(), "user");
        assert_eq!(
            MetadataScope::UserKey("key1".to_string()).meta_path(),
            "user/key1"
        );
        assert_eq!(MetadataScope::Exif.meta_path(), "exif");
        assert_eq!(MetadataScope::Gpano.meta_path(), "gpano");
    }
}
