//! Common error infrastructure for uppercut-core.
//!
//! Every error here is fatal to the caller. The simulation is deterministic,
//! so a failure means bad content or a programming error and is never
//! retried.
//!
//! # Error Kinds
//!
//! - [`CatalogError`]: unknown names and malformed catalog records
//! - [`CombatError`]: battle preconditions (empty loadouts)
//! - [`UppercutError`]: union of the above for campaign-level APIs

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input from the caller (e.g. a character name that does not exist).
    ///
    /// Should not be retried without changing the request.
    Validation,

    /// Broken content or violated precondition; the run cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates corrupted content or a bug.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all uppercut-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

// ============================================================================
// Catalog Errors
// ============================================================================

/// Errors raised while building or querying the content catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Requested character is not in the catalog.
    #[error("character not found: '{0}'")]
    UnknownCharacter(String),

    /// A character references a moveset key that does not exist.
    #[error("character '{character}' references unknown moveset '{moveset}'")]
    UnknownMoveset { character: String, moveset: String },

    /// A character references a gear id that does not exist.
    #[error("character '{character}' references unknown gear '{gear_id}'")]
    UnknownGear { character: String, gear_id: String },

    /// A record is missing a required field or carries an invalid value.
    #[error("malformed catalog entry '{record}': {field}")]
    MalformedEntry { record: String, field: String },

    /// Gear listed under a slot that does not match the item's own slot.
    #[error("character '{character}' equips '{gear_id}' in slot '{slot}' but it belongs in '{expected}'")]
    GearSlotMismatch {
        character: String,
        gear_id: String,
        slot: String,
        expected: String,
    },
}

impl CatalogError {
    /// Creates a MalformedEntry error.
    pub fn malformed(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MalformedEntry {
            record: record.into(),
            field: field.into(),
        }
    }

    /// Returns true for every variant that means the catalog itself is broken.
    pub fn is_malformed_catalog(&self) -> bool {
        !matches!(self, Self::UnknownCharacter(_))
    }
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCharacter(_) => ErrorSeverity::Validation,
            Self::UnknownMoveset { .. }
            | Self::UnknownGear { .. }
            | Self::MalformedEntry { .. }
            | Self::GearSlotMismatch { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCharacter(_) => "CATALOG_UNKNOWN_CHARACTER",
            Self::UnknownMoveset { .. } => "CATALOG_UNKNOWN_MOVESET",
            Self::UnknownGear { .. } => "CATALOG_UNKNOWN_GEAR",
            Self::MalformedEntry { .. } => "CATALOG_MALFORMED_ENTRY",
            Self::GearSlotMismatch { .. } => "CATALOG_GEAR_SLOT_MISMATCH",
        }
    }
}

// ============================================================================
// Combat Errors
// ============================================================================

/// Errors raised by the combatant model and battle engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// Combatant has no moves to choose from.
    #[error("combatant '{0}' has an empty loadout")]
    EmptyLoadout(String),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyLoadout(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyLoadout(_) => "COMBAT_EMPTY_LOADOUT",
        }
    }
}

// ============================================================================
// Unified Error
// ============================================================================

/// Any error surfaced by the campaign layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UppercutError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl GameError for UppercutError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Catalog(e) => e.severity(),
            Self::Combat(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Combat(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_character_is_a_validation_error() {
        let err = CatalogError::UnknownCharacter("Nobody".into());
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.is_malformed_catalog());
        assert!(err.to_string().contains("Nobody"));
    }

    #[test]
    fn dangling_references_are_fatal() {
        let err = CatalogError::UnknownGear {
            character: "MC Blaze".into(),
            gear_id: "ghost_mic".into(),
        };
        assert!(err.severity().is_fatal());
        assert!(err.is_malformed_catalog());
        assert_eq!(err.error_code(), "CATALOG_UNKNOWN_GEAR");
    }

    #[test]
    fn unified_error_delegates_classification() {
        let err: UppercutError = CombatError::EmptyLoadout("Mute".into()).into();
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "COMBAT_EMPTY_LOADOUT");
    }
}
