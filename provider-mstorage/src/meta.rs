//! User metadata set validation
//!
//! A metadata batch is validated as a whole before any request is issued:
//! entry count, key pattern, and value byte lengths. A single bad entry fails
//! the entire batch with no network interaction.

use crate::error::{Result, StorageError};
use crate::scope::is_valid_user_key;
use std::collections::HashMap;

/// Maximum number of entries accepted per batch.
pub const MAX_META_ENTRIES: usize = 10;

/// Maximum UTF-8 encoded length of a metadata value, in bytes.
pub const MAX_META_VALUE_BYTES: usize = 1024;

/// Validate a user metadata batch and strip the `user.` prefix from each key.
///
/// Keys must be of the form `user.<key>` where `<key>` matches
/// `[A-Za-z0-9_-]{1,32}`; values must encode to 1..=1024 bytes of UTF-8.
pub(crate) fn validate_entries(meta: &HashMap<String, String>) -> Result<Vec<(String, String)>> {
    if meta.len() > MAX_META_ENTRIES {
        return Err(StorageError::parameter(format!(
            "metadata set has {} entries, maximum is {MAX_META_ENTRIES}",
            meta.len()
        )));
    }

    let mut entries = Vec::with_capacity(meta.len());
    for (key, value) in meta {
        let bare = match key.strip_prefix("user.") {
            Some(bare) if is_valid_user_key(bare) => bare,
            _ => {
                return Err(StorageError::parameter(format!(
                    "invalid user metadata key: {key}"
                )))
            }
        };
        if value.is_empty() || value.len() > MAX_META_VALUE_BYTES {
            return Err(StorageError::parameter(format!(
                "metadata value for {key} must be 1..={MAX_META_VALUE_BYTES} bytes, got {}",
                value.len()
            )));
        }
        entries.push((bare.to_string(), value.clone()));
    }

    Ok(entries)
}
