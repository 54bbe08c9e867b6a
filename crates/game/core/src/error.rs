//! Common error infrastructure for battle-core.
//!
//! Only caller mistakes surface as errors: submitting input for a battler
//! that cannot act, or building a battle from incomplete data. Everything
//! that can go wrong *inside* a battle (dead targets, missing resonance,
//! unknown skills) resolves as an aborted action event instead, so the
//! queue always keeps moving.

use crate::state::BattlerId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry later or with a different input.
    ///
    /// Examples: battler not ready yet, battler already has an action queued
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown battler, enemy given player input
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - battle cannot be constructed or continued.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all battle-core errors.
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Rejected player input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    #[error("battler {0} does not exist")]
    UnknownBattler(BattlerId),

    #[error("battler {0} is not player-controlled")]
    NotPlayerControlled(BattlerId),

    #[error("battler {0} is defeated")]
    Defeated(BattlerId),

    #[error("battler {0} is not ready to act")]
    NotReady(BattlerId),

    #[error("battler {0} already has an action pending")]
    AlreadyCommitted(BattlerId),

    #[error("no valid target for battler {0}")]
    NoTarget(BattlerId),

    #[error("the battle is over")]
    BattleOver,
}

impl BattleError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotReady(_) | Self::AlreadyCommitted(_) => ErrorSeverity::Recoverable,
            Self::UnknownBattler(_)
            | Self::NotPlayerControlled(_)
            | Self::Defeated(_)
            | Self::NoTarget(_)
            | Self::BattleOver => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownBattler(_) => "COMMAND_UNKNOWN_BATTLER",
            Self::NotPlayerControlled(_) => "COMMAND_NOT_PLAYER_CONTROLLED",
            Self::Defeated(_) => "COMMAND_DEFEATED",
            Self::NotReady(_) => "COMMAND_NOT_READY",
            Self::AlreadyCommitted(_) => "COMMAND_ALREADY_COMMITTED",
            Self::NoTarget(_) => "COMMAND_NO_TARGET",
            Self::BattleOver => "COMMAND_BATTLE_OVER",
        }
    }
}

/// Battle construction failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("a battle needs at least one party member")]
    EmptyParty,

    #[error("a battle needs at least one enemy")]
    EmptyEncounter,

    #[error("unknown enemy template '{0}'")]
    UnknownEnemyTemplate(String),
}

impl BattleError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyParty => "SETUP_EMPTY_PARTY",
            Self::EmptyEncounter => "SETUP_EMPTY_ENCOUNTER",
            Self::UnknownEnemyTemplate(_) => "SETUP_UNKNOWN_TEMPLATE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_errors_are_recoverable() {
        assert!(
            CommandError::NotReady(BattlerId(0))
                .severity()
                .is_recoverable()
        );
        assert!(!CommandError::BattleOver.severity().is_recoverable());
    }

    #[test]
    fn messages_name_the_battler() {
        let err = CommandError::Defeated(BattlerId(3));
        assert_eq!(err.to_string(), "battler #3 is defeated");
        assert_eq!(err.error_code(), "COMMAND_DEFEATED");
    }
}
