// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type returned when registering options.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Validation errors (invalid option shape)
    //------------------------------
    /// The long option name is too short or contains characters that
    /// could never be matched on the command-line.
    #[error("invalid option name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The short option character cannot be used as an option code.
    #[error("invalid short option {short:?}: {reason}")]
    InvalidShort {
        /// The rejected character.
        short: char,
        /// Why it was rejected.
        reason: &'static str,
    },

    //------------------------------
    // Duplicate errors
    //------------------------------
    /// An option with the same long name is already registered.
    #[error("the option \"--{0}\" already exists")]
    DuplicateName(String),

    /// An option with the same short name is already registered.
    #[error("the option \"-{0}\" already exists")]
    DuplicateShort(char),
}

impl Error {
    /// Returns `true` if the option was rejected because of its shape.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidName { .. } | Error::InvalidShort { .. })
    }

    /// Returns `true` if the option clashed with one already registered.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateName(_) | Error::DuplicateShort(_))
    }
}

/// A problem found with a single command-line token.
///
/// Parsing never stops at the first of these: all of them are
/// collected and returned together in [crate::ParseResult::Failure].
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// User specified a long option that is not registered.
    #[error("--{0} does not exist")]
    UnknownLong(String),

    /// User specified a short option that is not registered.
    #[error("{0} does not exist")]
    UnknownShort(char),

    /// A value-taking option was not followed by a value.
    ///
    /// Holds the option as the user wrote it (`--install` or `-i`).
    #[error("Option \"{0}\" requires a value")]
    MissingValue(String),
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
