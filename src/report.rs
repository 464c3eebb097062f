// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::BTreeMap;

use crate::schema::normalize_name;

/// Problems with the command-line that could not be attributed to a
/// declared argument: unknown or unnamed arguments, stray values and
/// values of the wrong type.
///
/// Errors are keyed by the position of the offending argument on the
/// command-line (starting at 1) and iterate in that order. A single
/// position may have more than one message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentErrors {
    entries: BTreeMap<usize, Vec<String>>,
}

impl ArgumentErrors {
    pub(crate) fn push(&mut self, index: usize, msg: String) {
        tracing::trace!(index, msg = %msg, "argument error");

        self.entries.entry(index).or_default().push(msg);
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of command-line positions with errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of error messages.
    pub fn message_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Messages for the argument at the specified position.
    pub fn get(&self, index: usize) -> Option<&[String]> {
        self.entries.get(&index).map(Vec::as_slice)
    }

    /// All errors, ordered by command-line position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.entries.iter().map(|(i, m)| (*i, m.as_slice()))
    }
}

/// Declared arguments that failed a requirement: required options with
/// no value, and values rejected by a validator.
///
/// Errors are keyed by option name and iterate in declaration order. A
/// single option may have more than one message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpectationErrors {
    /// Map of declaration sequence to option name and messages.
    entries: BTreeMap<usize, (String, Vec<String>)>,
}

impl ExpectationErrors {
    pub(crate) fn push(&mut self, sequence: usize, name: &str, msg: String) {
        tracing::trace!(name, msg = %msg, "expectation error");

        self.entries
            .entry(sequence)
            .or_insert_with(|| (name.into(), Vec::new()))
            .1
            .push(msg);
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of options with errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of error messages.
    pub fn message_count(&self) -> usize {
        self.entries.values().map(|(_, m)| m.len()).sum()
    }

    /// Messages for the specified option.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        let name = normalize_name(name);

        self.entries
            .values()
            .find(|(n, _)| *n == name)
            .map(|(_, m)| m.as_slice())
    }

    /// All errors, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .values()
            .map(|(n, m)| (n.as_str(), m.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_errors() {
        let mut errors = ArgumentErrors::default();

        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.get(1), None);

        errors.push(7, "seven".into());
        errors.push(2, "two".into());
        errors.push(7, "seven again".into());

        assert!(!errors.is_empty());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message_count(), 3);
        assert_eq!(
            errors.get(7),
            Some(&["seven".to_string(), "seven again".to_string()][..])
        );

        let indexes: Vec<usize> = errors.iter().map(|(i, _)| i).collect();
        assert_eq!(indexes, vec![2, 7]);
    }

    #[test]
    fn test_expectation_errors() {
        let mut errors = ExpectationErrors::default();

        assert!(errors.is_empty());

        errors.push(3, "filename", "bad extension".into());
        errors.push(1, "write", "write is required".into());
        errors.push(3, "filename", "too long".into());

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message_count(), 3);

        assert_eq!(errors.get("Write"), Some(&["write is required".to_string()][..]));
        assert_eq!(errors.get("--filename").map(<[String]>::len), Some(2));
        assert_eq!(errors.get("port"), None);

        let names: Vec<&str> = errors.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["write", "filename"]);

        let (_, messages) = errors.iter().nth(1).unwrap();
        assert_eq!(messages, &["bad extension".to_string(), "too long".to_string()][..]);
    }
}
