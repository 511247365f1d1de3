//! Per-session player identity.

use derive_getters::Getters;
use uuid::Uuid;

/// Identity of the player this session publishes for.
///
/// The id is unique across players; the display name need not be. Both are
/// fixed for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerIdentity {
    /// Opaque unique identifier.
    id: String,
    /// Human-readable display name.
    name: String,
}

impl PlayerIdentity {
    /// Creates an identity from an existing id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates an identity with a freshly generated UUID v4 id.
    pub fn generate(name: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), name)
    }
}
