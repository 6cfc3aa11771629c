//! Front-matter errors

use super::NbFilterError;

/// Creates a front matter parse failed error
pub fn parse_failed(reason: impl Into<String>) -> NbFilterError {
    NbFilterError::MetadataParseFailed {
        reason: reason.into(),
    }
}

/// Creates a front matter not-a-mapping error
pub fn not_a_mapping(found: impl Into<String>) -> NbFilterError {
    NbFilterError::MetadataNotMapping {
        found: found.into(),
    }
}
