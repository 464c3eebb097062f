// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

use crate::value::ValueType;

/// The error type.
///
/// These errors are only ever returned for incorrect use of the API (a
/// programming error in the host). Problems with the command-line the
/// user supplied are never returned as an [Error]: they are collected in
/// [ArgumentErrors](crate::ArgumentErrors) and
/// [ExpectationErrors](crate::ExpectationErrors) instead.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Incorrect API usage errors: declarations
    //------------------------------
    /// The argument name is empty once dashes and whitespace are removed.
    #[error("argument name is empty")]
    EmptyName,

    /// An option or flag with the same (normalised) name already exists.
    #[error("argument already declared: {0}")]
    DuplicateName(String),

    /// A validator can only be registered for a declared option.
    #[error("not a declared option: {0}")]
    NotAnOption(String),

    /// An option can only have a single validator.
    #[error("validator already registered for option: {0}")]
    DuplicateValidator(String),

    /// The default value cannot be converted to the declared type.
    #[error("default value for {name} is not a valid {expected}")]
    InvalidDefault {
        /// Option name.
        name: String,
        /// The type the option was declared with.
        expected: ValueType,
    },

    /// Flags are either provided or not: they cannot have a default.
    #[error("flag cannot have a default value: {0}")]
    FlagDefault(String),

    //------------------------------
    // Incorrect API usage errors: queries
    //------------------------------
    /// Queried a flag that was never declared.
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    /// Queried an option that was never declared.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Asked for an option value using the wrong type.
    #[error("option {name} has type {declared}, not {requested}")]
    TypeMismatch {
        /// Option name.
        name: String,
        /// The type the option was declared with.
        declared: ValueType,
        /// The type the caller asked for.
        requested: ValueType,
    },

    /// Results were queried before the command-line was parsed.
    #[error("command-line not parsed")]
    NotParsed,

    //------------------------------
    // Output errors
    //------------------------------
    /// Failed to write help or error text.
    #[error("failed to write output: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        #[derive(Debug)]
        struct TestData<'a> {
            error: Error,
            display: &'a str,
        }

        let tests = &[
            TestData {
                error: Error::DuplicateName("port".into()),
                display: "argument already declared: port",
            },
            TestData {
                error: Error::InvalidDefault {
                    name: "port".into(),
                    expected: ValueType::Integer,
                },
                display: "default value for port is not a valid integer",
            },
            TestData {
                error: Error::TypeMismatch {
                    name: "port".into(),
                    declared: ValueType::Integer,
                    requested: ValueType::Text,
                },
                display: "option port has type integer, not text",
            },
            TestData {
                error: Error::NotParsed,
                display: "command-line not parsed",
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            assert_eq!(d.error.to_string(), d.display, "{}", msg);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");

        let err = Error::from(io_err);

        assert_eq!(err, Error::Io("pipe gone".into()));
    }
}
