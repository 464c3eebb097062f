// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::{HashMap, HashSet};

use crate::report::{ArgumentErrors, ExpectationErrors};
use crate::schema::Schema;
use crate::token::{Class, Token};
use crate::value::{coerce, Value};

/// The outcome of binding the classified command-line to the schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Bound {
    /// Names of the flags found, in the order they were first found.
    pub flags: Vec<String>,
    /// Map of option name to value (including defaults).
    pub options: HashMap<String, Value>,
    /// Options that were specified without a usable value.
    pub malformed: HashSet<String>,
    pub argument_errors: ArgumentErrors,
    pub expectation_errors: ExpectationErrors,
}

impl Bound {
    pub fn has_errors(&self) -> bool {
        !self.argument_errors.is_empty() || !self.expectation_errors.is_empty()
    }

    /// Work out what each argument refers to, recording any argument
    /// errors against the position of the argument.
    fn resolve_tokens(&mut self, tokens: &[Token], schema: &Schema) {
        for token in tokens {
            match token.class {
                Class::Unknown => self
                    .argument_errors
                    .push(token.index, format!("unexpected value: {}", token.text)),
                Class::Flag => self.resolve_flag(token, schema),
                Class::Option => self.resolve_option(token, schema),
                Class::Skip => (),
            }
        }
    }

    fn resolve_flag(&mut self, token: &Token, schema: &Schema) {
        let name = &token.name;

        if name.is_empty() {
            self.argument_errors
                .push(token.index, "flag received with no name".into());
        } else if schema.is_known_flag(name) {
            // Specifying a flag more than once is not an error.
            if !self.flags.contains(name) {
                self.flags.push(name.clone());
            }
        } else if schema.is_known_option(name) {
            self.malformed.insert(name.clone());

            self.argument_errors
                .push(token.index, format!("option requires a value: {}", name));
        } else {
            self.argument_errors
                .push(token.index, format!("unknown flag: {}", name));
        }
    }

    fn resolve_option(&mut self, token: &Token, schema: &Schema) {
        let name = &token.name;
        let raw = token.value.as_deref().unwrap_or_default();

        if name.is_empty() {
            self.argument_errors
                .push(token.index, "option received with no name".into());
            return;
        }

        let declaration = match schema.lookup(name) {
            Some(d) if d.expects_value() => d,
            Some(_) => {
                self.argument_errors
                    .push(token.index, format!("flag does not take a value: {}", name));
                return;
            }
            None => {
                self.argument_errors
                    .push(token.index, format!("unknown option: {}", name));
                return;
            }
        };

        match coerce(declaration.value_type(), raw) {
            // A later value replaces an earlier one.
            Some(value) => {
                self.options.insert(name.clone(), value);
            }
            // The option is left unset so a default or a later valid
            // value can still apply.
            None => {
                self.malformed.insert(name.clone());

                self.argument_errors.push(
                    token.index,
                    format!(
                        "expected a value of type {}: {}",
                        declaration.value_type(),
                        name
                    ),
                );
            }
        }
    }

    /// Apply defaults, check required options are set and run the
    /// validators, recording any expectation errors against the option.
    fn complete(&mut self, schema: &Schema) {
        for declaration in schema.iter().filter(|d| d.expects_value()) {
            let name = declaration.name();

            if self.options.contains_key(name) {
                continue;
            }

            if let Some(value) = declaration.default_value() {
                self.options.insert(name.into(), value.clone());
            } else if declaration.is_required() && !self.malformed.contains(name) {
                // A malformed value has already been reported as an
                // argument error.
                self.expectation_errors.push(
                    declaration.sequence(),
                    name,
                    format!("{} is required", name),
                );
            }
        }

        for declaration in schema.iter() {
            let name = declaration.name();

            if let (Some(value), Some(validator)) = (self.options.get(name), schema.validator(name))
            {
                for msg in validator.validate(name, value) {
                    self.expectation_errors
                        .push(declaration.sequence(), name, msg);
                }
            }
        }
    }
}

/// Bind the classified command-line arguments to the schema.
///
/// Every problem is recorded; binding never stops early.
pub(crate) fn bind(tokens: &[Token], schema: &Schema) -> Bound {
    let mut bound = Bound::default();

    bound.resolve_tokens(tokens, schema);
    bound.complete(schema);

    bound
}
