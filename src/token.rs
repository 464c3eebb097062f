// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::schema::OPT_PREFIX;

/// What a command-line argument was found to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Class {
    /// A value that does not belong to an option.
    Unknown,
    /// A value consumed by the option before it.
    Skip,
    /// A dash-prefixed argument without a value.
    Flag,
    /// A dash-prefixed argument followed by its value.
    Option,
}

/// A classified command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    /// Position of the argument on the command-line (starting at 1).
    pub index: usize,
    /// The argument exactly as specified.
    pub text: String,
    pub class: Class,
    /// Lower-case name with all leading dashes removed (empty for values).
    pub name: String,
    /// Option value (only set for [Class::Option]).
    pub value: Option<String>,
}

/// Classify the command-line arguments in a single pass.
///
/// A dash-prefixed argument starts out as a flag. If the argument after it
/// is not dash-prefixed, it is changed into an option that takes that
/// argument as its value. The consumed value is not returned.
pub(crate) fn tokenize<S: AsRef<str>>(cli_args: &[S]) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(cli_args.len());

    // Index into `tokens` of the dash-prefixed argument that could still
    // take the next argument as its value.
    let mut pending: Option<usize> = None;

    for (i, cli_arg) in cli_args.iter().enumerate() {
        let text = cli_arg.as_ref();
        let index = i + 1;

        if text.starts_with(OPT_PREFIX) {
            // Any pending flag is now confirmed as a flag.
            pending = Some(tokens.len());

            let name = text.trim_start_matches(OPT_PREFIX).trim().to_lowercase();

            tracing::trace!(index, name = %name, "dash argument");

            tokens.push(Token {
                index,
                text: text.into(),
                class: Class::Flag,
                name,
                value: None,
            });
        } else if let Some(owner) = pending.take() {
            let owner = &mut tokens[owner];

            owner.class = Class::Option;
            owner.value = Some(text.into());

            tracing::trace!(index = owner.index, name = %owner.name, "option with value");

            tokens.push(Token {
                index,
                text: text.into(),
                class: Class::Skip,
                name: String::new(),
                value: None,
            });
        } else {
            tracing::trace!(index, text, "orphan value");

            tokens.push(Token {
                index,
                text: text.into(),
                class: Class::Unknown,
                name: String::new(),
                value: None,
            });
        }
    }

    tokens.retain(|t| t.class != Class::Skip);

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        #[derive(Debug)]
        struct TestData<'a> {
            cli_args: Vec<&'a str>,
            // index, class, name, value
            result: Vec<(usize, Class, &'a str, Option<&'a str>)>,
        }

        let tests = &[
            TestData {
                cli_args: vec![],
                result: vec![],
            },
            TestData {
                cli_args: vec!["-serve"],
                result: vec![(1, Class::Flag, "serve", None)],
            },
            TestData {
                cli_args: vec!["--Serve"],
                result: vec![(1, Class::Flag, "serve", None)],
            },
            TestData {
                cli_args: vec!["-port", "3000"],
                result: vec![(1, Class::Option, "port", Some("3000"))],
            },
            TestData {
                cli_args: vec!["data"],
                result: vec![(1, Class::Unknown, "", None)],
            },
            TestData {
                cli_args: vec!["-a", "-b", "-c"],
                result: vec![
                    (1, Class::Flag, "a", None),
                    (2, Class::Flag, "b", None),
                    (3, Class::Flag, "c", None),
                ],
            },
            TestData {
                cli_args: vec!["-a", "1", "2", "-b"],
                result: vec![
                    (1, Class::Option, "a", Some("1")),
                    (3, Class::Unknown, "", None),
                    (4, Class::Flag, "b", None),
                ],
            },
            TestData {
                // A negative number is an argument, not a value.
                cli_args: vec!["-offset", "-5"],
                result: vec![(1, Class::Flag, "offset", None), (2, Class::Flag, "5", None)],
            },
            TestData {
                cli_args: vec!["- 1 -a -"],
                result: vec![(1, Class::Flag, "1 -a -", None)],
            },
            TestData {
                cli_args: vec!["-", "1", "-a", "-"],
                result: vec![
                    (1, Class::Option, "", Some("1")),
                    (3, Class::Flag, "a", None),
                    (4, Class::Flag, "", None),
                ],
            },
            TestData {
                cli_args: vec!["---", "--"],
                result: vec![(1, Class::Flag, "", None), (2, Class::Flag, "", None)],
            },
            TestData {
                cli_args: vec![
                    "-run",
                    "data",
                    "Site Title",
                    "-serve",
                    "-ignore",
                    "-port",
                    "3000",
                ],
                result: vec![
                    (1, Class::Option, "run", Some("data")),
                    (3, Class::Unknown, "", None),
                    (4, Class::Flag, "serve", None),
                    (5, Class::Flag, "ignore", None),
                    (6, Class::Option, "port", Some("3000")),
                ],
            },
            TestData {
                // Values keep their case and whitespace.
                cli_args: vec!["-Title", " Hello World "],
                result: vec![(1, Class::Option, "title", Some(" Hello World "))],
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let tokens = tokenize(d.cli_args.as_slice());

            let msg = format!("test[{}]: {:?}, tokens: {:?}", i, d, tokens);

            let result: Vec<(usize, Class, &str, Option<&str>)> = tokens
                .iter()
                .map(|t| (t.index, t.class, t.name.as_str(), t.value.as_deref()))
                .collect();

            assert_eq!(result, d.result, "{}", msg);
        }
    }

    #[test]
    fn test_token_text() {
        let tokens = tokenize(&["--Port", "80", "stray"]);

        assert_eq!(tokens.len(), 2);

        assert_eq!(tokens[0].text, "--Port");
        assert_eq!(tokens[0].class, Class::Option);

        assert_eq!(tokens[1].text, "stray");
        assert_eq!(tokens[1].class, Class::Unknown);
    }
}
