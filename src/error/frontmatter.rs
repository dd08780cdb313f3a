//! Front-matter decoding errors

use super::NbMetaError;

/// Creates a front matter parse failed error
pub fn parse_failed(reason: impl Into<String>) -> NbMetaError {
    NbMetaError::FrontmatterParseFailed {
        reason: reason.into(),
    }
}

/// Creates a front matter not a mapping error
pub fn not_mapping(found: impl Into<String>) -> NbMetaError {
    NbMetaError::FrontmatterNotMapping {
        found: found.into(),
    }
}

/// Creates an invalid front matter key error
pub fn invalid_key(key: impl Into<String>) -> NbMetaError {
    NbMetaError::FrontmatterInvalidKey { key: key.into() }
}
