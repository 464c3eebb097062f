// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::value::{coerce_value, Value, ValueType};

pub(crate) const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";

/// String to show in usage if an option is required
const REQUIRED_STR: &str = " (required)";

/// Used to specify whether an argument is a flag (needs no value), or
/// whether it is an option that requires a value.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Need {
    /// Argument is a flag (no value required).
    Nothing,
    /// Argument is an option and needs a value.
    Argument,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

impl Need {
    /// Create a new default requirement for an [Arg].
    pub fn new() -> Self {
        Need::default()
    }
}

/// Trait that a custom option validator must implement.
///
/// It is implemented for all closures of the form
/// `|name: &str, value: &Value| -> Vec<String>`.
pub trait Validator {
    /// Check the value provided for an option.
    ///
    /// # Parameters
    ///
    /// - `name` - The (normalised) option name.
    /// - `value` - The value for the option, already converted to the
    ///   declared type.
    ///
    /// # Return value
    ///
    /// A list of problems found with the value, in the order they should
    /// be shown to the user. An empty list means the value is valid.
    fn validate(&self, name: &str, value: &Value) -> Vec<String>;
}

impl<F> Validator for F
where
    F: Fn(&str, &Value) -> Vec<String>,
{
    fn validate(&self, name: &str, value: &Value) -> Vec<String> {
        self(name, value)
    }
}

impl<'a> fmt::Debug for dyn Validator + 'a {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Validator: {:p}", self)
    }
}

/// Normalise an argument name: remove surrounding whitespace and a single
/// leading `-` or `--` prefix, then convert to lower case.
pub(crate) fn normalize_name(name: &str) -> String {
    let name = name.trim();

    let name = name
        .strip_prefix(LONG_OPT_PREFIX)
        .or_else(|| name.strip_prefix(OPT_PREFIX))
        .unwrap_or(name);

    name.trim().to_lowercase()
}

/// Description of an argument to declare: either an option (which
/// requires a value) or a flag.
///
/// # Note
///
/// - All members are public for convenience.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arg {
    /// Argument name. Case is ignored, as is a leading `-` or `--`.
    pub name: String,
    /// Whether the argument is a flag or an option.
    pub needs: Need,
    /// The type of value an option accepts (ignored for flags).
    pub value_type: ValueType,
    /// Description of the argument.
    pub help: Option<String>,
    /// Set if the option must be specified.
    ///
    /// # Note
    ///
    /// Flags may be marked as required, but since a missing flag simply
    /// means "off", this never generates an error.
    pub required: bool,
    /// Value the option takes if it is not specified on the command-line.
    pub default: Option<Value>,
}

impl Arg {
    /// Create a new option that needs a value of the specified type.
    pub fn option(name: &str, value_type: ValueType) -> Self {
        Arg {
            name: name.into(),
            needs: Need::Argument,
            value_type,
            ..Default::default()
        }
    }

    /// Create a new flag.
    pub fn flag(name: &str) -> Self {
        Arg {
            name: name.into(),
            needs: Need::Nothing,
            value_type: ValueType::Boolean,
            ..Default::default()
        }
    }

    /// Specify the help text for the argument.
    pub fn help(self, help: &str) -> Self {
        Arg {
            help: Some(help.into()),
            ..self
        }
    }

    /// Specify that the option must be provided on the command-line.
    pub fn required(self) -> Self {
        Arg {
            required: true,
            ..self
        }
    }

    /// Specify the value to use if the option is not provided.
    pub fn default_value<V: Into<Value>>(self, value: V) -> Self {
        Arg {
            default: Some(value.into()),
            ..self
        }
    }
}

/// A declared argument.
///
/// Created when an [Arg] is registered and never modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    name: String,
    sequence: usize,
    value_type: ValueType,
    required: bool,
    needs: Need,
    info: String,
    default: Option<Value>,
}

impl Declaration {
    /// The normalised name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the declaration order (starting at 1).
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Type of value the option accepts.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Set if declared as required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Set for options, unset for flags.
    pub fn expects_value(&self) -> bool {
        self.needs == Need::Argument
    }

    /// Set for flags.
    pub fn is_flag(&self) -> bool {
        !self.expects_value()
    }

    /// Help text (empty if none was specified).
    pub fn info(&self) -> &str {
        &self.info
    }

    /// The default value, already converted to the declared type.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Set if values for this argument are free text and should be quoted
    /// when shown.
    pub fn is_quoted(&self) -> bool {
        self.expects_value() && self.value_type.is_quoted()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", OPT_PREFIX, self.name)?;

        if self.expects_value() {
            write!(f, " <{}>", self.value_type)?;
        }

        if self.required && self.expects_value() {
            write!(f, "{}", REQUIRED_STR)?;
        }

        if let Some(value) = &self.default {
            if self.is_quoted() {
                write!(f, " (default: {:?})", value.to_string())?;
            } else {
                write!(f, " (default: {})", value)?;
            }
        }

        if !self.info.is_empty() {
            write!(f, " # {}", self.info)?;
        }

        Ok(())
    }
}

/// The set of declared arguments, in declaration order.
#[derive(Debug, Default)]
pub struct Schema<'a> {
    entries: Vec<Declaration>,
    /// Map of normalised name to index in `entries`.
    index: HashMap<String, usize>,
    validators: HashMap<String, Box<dyn Validator + 'a>>,
}

impl<'a> Schema<'a> {
    /// Create a new, empty schema.
    pub fn new() -> Self {
        Schema::default()
    }

    /// Returns the number of declared arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a single argument.
    ///
    /// Fails if the name is empty or already declared, or if the default
    /// value is not valid for the argument.
    pub fn declare(&mut self, arg: Arg) -> Result<()> {
        let name = normalize_name(&arg.name);

        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        if self.index.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }

        let default = match (&arg.default, arg.needs) {
            (None, _) => None,
            (Some(_), Need::Nothing) => return Err(Error::FlagDefault(name)),
            (Some(value), Need::Argument) => Some(coerce_value(arg.value_type, value).ok_or(
                Error::InvalidDefault {
                    name: name.clone(),
                    expected: arg.value_type,
                },
            )?),
        };

        let declaration = Declaration {
            name: name.clone(),
            sequence: self.entries.len() + 1,
            value_type: arg.value_type,
            required: arg.required,
            needs: arg.needs,
            info: arg.help.unwrap_or_default(),
            default,
        };

        tracing::trace!(name = %name, sequence = declaration.sequence, "declared argument");

        self.index.insert(name, self.entries.len());
        self.entries.push(declaration);

        Ok(())
    }

    /// Register a validator for an option.
    ///
    /// Fails if the option has not been declared or already has a validator.
    pub fn register_validator<V>(&mut self, name: &str, validator: V) -> Result<()>
    where
        V: Validator + 'a,
    {
        let name = normalize_name(name);

        if !self.is_known_option(&name) {
            return Err(Error::NotAnOption(name));
        }

        if self.validators.contains_key(&name) {
            return Err(Error::DuplicateValidator(name));
        }

        self.validators.insert(name, Box::new(validator));

        Ok(())
    }

    /// Returns the declaration for the specified name.
    pub fn lookup(&self, name: &str) -> Option<&Declaration> {
        self.index
            .get(&normalize_name(name))
            .and_then(|i| self.entries.get(*i))
    }

    /// Determine if an option with the specified name has been declared.
    pub fn is_known_option(&self, name: &str) -> bool {
        self.lookup(name).map_or(false, Declaration::expects_value)
    }

    /// Determine if a flag with the specified name has been declared.
    pub fn is_known_flag(&self, name: &str) -> bool {
        self.lookup(name).map_or(false, Declaration::is_flag)
    }

    /// All declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter()
    }

    /// All declarations sorted by name.
    pub fn sorted_by_name(&self) -> Vec<&Declaration> {
        let mut entries: Vec<&Declaration> = self.entries.iter().collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        entries
    }

    /// Returns the validator registered for the (normalised) option name.
    pub(crate) fn validator(&self, name: &str) -> Option<&(dyn Validator + 'a)> {
        self.validators.get(name).map(|v| v.as_ref())
    }
}
