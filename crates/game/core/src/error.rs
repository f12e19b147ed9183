//! Common error infrastructure for adventurer-core.
//!
//! Invalid enumerated inputs (an unrecognized race, class, sex or alignment)
//! never panic. They are stored on the adventurer as
//! [`Classified::Invalid`](crate::state::Classified) and surface here as typed
//! errors from every computation that needs the missing value.
//!
//! # Design Principles
//!
//! - **Type Safety**: Invalid input is a distinct error, never a magic `-1`
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Deterministic**: All types are plain data, cheap to clone and compare

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed on retry or with alternative input
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown race, level below 1, fortune category outside 1-5
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all adventurer-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by the rules engine when an input falls outside its domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RulesError {
    /// The adventurer's race did not validate at creation.
    #[error("race is not a recognized value")]
    InvalidRace,

    /// The adventurer's class did not validate at creation.
    #[error("class is not a recognized value")]
    InvalidClass,

    /// Levels start at 1.
    #[error("level {0} is below the minimum of 1")]
    InvalidLevel(i32),

    /// Fortune categories are numbered 1 through 5.
    #[error("fortune category {0} is outside 1..=5")]
    InvalidFortuneCategory(u8),

    /// Spell tiers are numbered 1 through 7.
    #[error("spell tier {0} is outside 1..=7")]
    InvalidSpellTier(u8),

    /// Status ordinals are numbered 0 through 7.
    #[error("status ordinal {0} is outside 0..=7")]
    InvalidStatus(u8),
}

impl GameError for RulesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use RulesError::*;
        match self {
            InvalidRace => "RULES_INVALID_RACE",
            InvalidClass => "RULES_INVALID_CLASS",
            InvalidLevel(_) => "RULES_INVALID_LEVEL",
            InvalidFortuneCategory(_) => "RULES_INVALID_FORTUNE_CATEGORY",
            InvalidSpellTier(_) => "RULES_INVALID_SPELL_TIER",
            InvalidStatus(_) => "RULES_INVALID_STATUS",
        }
    }
}
