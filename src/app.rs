// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;

use crate::binder::{bind, Bound};
use crate::error::{Error, Result};
use crate::report::{ArgumentErrors, ExpectationErrors};
use crate::schema::{normalize_name, Arg, Declaration, Schema, Validator, OPT_PREFIX};
use crate::token::tokenize;
use crate::value::{FromValue, Value, ValueType};

/// Settings used to control how help text is generated.
///
/// None of these settings change how the command-line is parsed.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, list arguments alphabetically in the help text rather than
    /// in the order they were declared.
    alphabetical_help: bool,

    /// If set, don't explain the `(required)` marker in the help text.
    no_legend: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Specify that the help text should list arguments alphabetically
    /// (by default, they are listed in declaration order).
    pub fn alphabetical_help(self) -> Self {
        Settings {
            alphabetical_help: true,
            ..self
        }
    }

    /// Specify that the help text should not include the legend line.
    pub fn no_legend(self) -> Self {
        Settings {
            no_legend: true,
            ..self
        }
    }

    pub(crate) fn is_alphabetical_help(&self) -> bool {
        self.alphabetical_help
    }

    pub(crate) fn is_no_legend(&self) -> bool {
        self.no_legend
    }
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used by [App::from_env()].
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// The main object used to represent the program.
///
/// An `App` is created for a single set of command-line arguments.
/// Arguments are declared on it, then [App::parse()] is called once, after
/// which the results can be queried.
#[derive(Debug, Default)]
pub struct App<'a> {
    pub(crate) name: String,
    pub(crate) version: String,
    pub(crate) summary: String,
    pub(crate) help: String,
    pub(crate) notes: String,
    pub(crate) settings: Settings,
    cli_args: Vec<String>,
    pub(crate) schema: Schema<'a>,
    bound: Option<Bound>,
}

impl<'a> App<'a> {
    /// Create a new application object for the specified command-line
    /// arguments (which must _not_ include the program name).
    pub fn new<I, S>(cli_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        App {
            cli_args: cli_args.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Create a new application object for the arguments the program
    /// was run with.
    pub fn from_env() -> Self {
        App::new(get_args())
    }

    /// Specify the name of the program.
    pub fn name(self, name: &str) -> Self {
        App {
            name: name.into(),
            ..self
        }
    }

    /// Specify the version of the program.
    pub fn version(self, version: &str) -> Self {
        App {
            version: version.into(),
            ..self
        }
    }

    /// Specify brief explanatory text for the program.
    pub fn summary(self, summary: &str) -> Self {
        App {
            summary: summary.into(),
            ..self
        }
    }

    /// Specify extended usage information for the program.
    pub fn help(self, help: &str) -> Self {
        App {
            help: help.into(),
            ..self
        }
    }

    /// Specify notes for the program.
    pub fn notes(self, notes: &str) -> Self {
        App {
            notes: notes.into(),
            ..self
        }
    }

    /// Specify any settings for the program.
    pub fn settings(self, settings: Settings) -> Self {
        App { settings, ..self }
    }

    /// The command-line arguments the application was created with.
    pub fn cli_args(&self) -> &[String] {
        &self.cli_args
    }

    /// The declared arguments.
    pub fn schema(&self) -> &Schema<'a> {
        &self.schema
    }

    //------------------------------
    // Declarations

    /// Declare an argument.
    ///
    /// Fails if the name is already declared or the argument is invalid
    /// (see [Schema::declare()]).
    pub fn arg(mut self, arg: Arg) -> Result<Self> {
        self.schema.declare(arg)?;

        Ok(self)
    }

    /// Declare an option that must be specified.
    pub fn required(self, name: &str, value_type: ValueType, info: &str) -> Result<Self> {
        self.arg(Arg::option(name, value_type).help(info).required())
    }

    /// Declare an option that may be specified.
    pub fn optional(self, name: &str, value_type: ValueType, info: &str) -> Result<Self> {
        self.arg(Arg::option(name, value_type).help(info))
    }

    /// Declare a flag.
    pub fn flag(self, name: &str, info: &str) -> Result<Self> {
        self.arg(Arg::flag(name).help(info))
    }

    /// Register a custom validator for a declared option.
    pub fn validator<V>(mut self, name: &str, validator: V) -> Result<Self>
    where
        V: Validator + 'a,
    {
        self.schema.register_validator(name, validator)?;

        Ok(self)
    }

    //------------------------------
    // Parsing

    /// Parse the command-line arguments against the declared arguments.
    ///
    /// Problems with the command-line do not stop the parse: they are all
    /// recorded and can be inspected with [App::has_errors()],
    /// [App::argument_errors()] and [App::expectation_errors()].
    ///
    /// # Note
    ///
    /// Only the first call parses: subsequent calls do nothing.
    pub fn parse(&mut self) -> &mut Self {
        if self.bound.is_some() {
            tracing::debug!("command-line already parsed");
            return self;
        }

        tracing::debug!(
            args = self.cli_args.len(),
            declared = self.schema.len(),
            "parsing command-line"
        );

        let tokens = tokenize(&self.cli_args);
        let bound = bind(&tokens, &self.schema);

        tracing::debug!(
            flags = bound.flags.len(),
            options = bound.options.len(),
            argument_errors = bound.argument_errors.message_count(),
            expectation_errors = bound.expectation_errors.message_count(),
            "parsed command-line"
        );

        self.bound = Some(bound);

        self
    }

    /// Returns true once [App::parse()] has been called.
    pub fn is_parsed(&self) -> bool {
        self.bound.is_some()
    }

    fn bound(&self) -> Result<&Bound> {
        self.bound.as_ref().ok_or(Error::NotParsed)
    }

    //------------------------------
    // Results

    /// Returns true if any argument or expectation errors were found.
    /// Always false before the command-line is parsed.
    pub fn has_errors(&self) -> bool {
        self.bound.as_ref().map_or(false, Bound::has_errors)
    }

    /// Problems with the command-line arguments themselves.
    pub fn argument_errors(&self) -> Result<&ArgumentErrors> {
        Ok(&self.bound()?.argument_errors)
    }

    /// Declared options that failed a requirement.
    pub fn expectation_errors(&self) -> Result<&ExpectationErrors> {
        Ok(&self.bound()?.expectation_errors)
    }

    /// Determine if the specified flag was specified on the command-line.
    pub fn is_flag_provided(&self, name: &str) -> Result<bool> {
        let name = normalize_name(name);

        if !self.schema.is_known_flag(&name) {
            return Err(Error::UnknownFlag(name));
        }

        Ok(self.bound()?.flags.contains(&name))
    }

    /// Determine if the specified option has a value, either from the
    /// command-line or from its default.
    pub fn is_option_provided(&self, name: &str) -> Result<bool> {
        let declaration = self.option_declaration(name)?;

        Ok(self.bound()?.options.contains_key(declaration.name()))
    }

    /// Returns the value of the specified option.
    ///
    /// If the option was not provided, the default value is returned if
    /// one was declared, otherwise the default for `T` (`0`, `false`, an
    /// empty string, _etc_).
    ///
    /// Fails if the option is not declared or `T` does not correspond to
    /// the declared [ValueType].
    ///
    /// # Example
    ///
    /// ```rust
    /// # use apv::{App, Arg, Result, ValueType};
    /// # fn main() -> Result<()> {
    /// let mut app = App::new(vec!["-port", "8080"])
    ///     .arg(Arg::option("port", ValueType::Integer).default_value(1337))?;
    ///
    /// app.parse();
    ///
    /// assert_eq!(app.get_option::<i64>("port")?, 8080);
    /// assert!(app.get_option::<String>("port").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_option<T: FromValue>(&self, name: &str) -> Result<T> {
        let declaration = self.option_declaration(name)?;

        if declaration.value_type() != T::VALUE_TYPE {
            return Err(Error::TypeMismatch {
                name: declaration.name().into(),
                declared: declaration.value_type(),
                requested: T::VALUE_TYPE,
            });
        }

        let value = self
            .bound()?
            .options
            .get(declaration.name())
            .or_else(|| declaration.default_value())
            .and_then(T::from_value)
            .unwrap_or_default();

        Ok(value)
    }

    /// Returns the value of the specified option without checking its type.
    pub fn value(&self, name: &str) -> Result<Option<&Value>> {
        let declaration = self.option_declaration(name)?;

        Ok(self
            .bound()?
            .options
            .get(declaration.name())
            .or_else(|| declaration.default_value()))
    }

    /// Returns all provided flags and options in declaration order. Flags
    /// have no value.
    pub fn provided(&self) -> Result<Vec<(&str, Option<&Value>)>> {
        Ok(self
            .provided_declarations()?
            .into_iter()
            .map(|(d, v)| (d.name(), v))
            .collect())
    }

    /// Returns all provided flags and options as command-line arguments,
    /// in declaration order.
    pub fn provided_args(&self) -> Result<Vec<String>> {
        let mut args = Vec::new();

        for (declaration, value) in self.provided_declarations()? {
            args.push(format!("{}{}", OPT_PREFIX, declaration.name()));

            if let Some(value) = value {
                args.push(value.to_string());
            }
        }

        Ok(args)
    }

    /// Returns all provided flags and options as a single command-line
    /// string, in declaration order. Free text values are quoted.
    pub fn provided_command_line(&self) -> Result<String> {
        let mut words = Vec::new();

        for (declaration, value) in self.provided_declarations()? {
            words.push(format!("{}{}", OPT_PREFIX, declaration.name()));

            match value {
                Some(value) if declaration.is_quoted() => words.push(quote(&value.to_string())),
                Some(value) => words.push(value.to_string()),
                None => (),
            }
        }

        Ok(words.join(" "))
    }

    fn option_declaration(&self, name: &str) -> Result<&Declaration> {
        self.schema
            .lookup(name)
            .filter(|d| d.expects_value())
            .ok_or_else(|| Error::UnknownOption(normalize_name(name)))
    }

    fn provided_declarations(&self) -> Result<Vec<(&Declaration, Option<&Value>)>> {
        let bound = self.bound()?;

        let provided = self
            .schema
            .iter()
            .filter_map(|d| {
                if d.is_flag() {
                    bound.flags.contains(&d.name().to_string()).then(|| (d, None))
                } else {
                    bound.options.get(d.name()).map(|v| (d, Some(v)))
                }
            })
            .collect();

        Ok(provided)
    }
}

/// Quote a value so a shell treats it as a single word.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, NaiveDateTime};

    fn server_app<'a>(cli_args: &[&str]) -> App<'a> {
        App::new(cli_args.iter().copied())
            .name("server")
            .required("write", ValueType::Text, "output directory")
            .unwrap()
            .arg(
                Arg::option("port", ValueType::Integer)
                    .help("port to listen on")
                    .default_value(1337),
            )
            .unwrap()
            .flag("serve", "start a web server")
            .unwrap()
    }

    fn all_messages(app: &App) -> Vec<String> {
        let mut messages: Vec<String> = app
            .argument_errors()
            .unwrap()
            .iter()
            .flat_map(|(_, m)| m.to_vec())
            .collect();

        messages.extend(
            app.expectation_errors()
                .unwrap()
                .iter()
                .flat_map(|(_, m)| m.to_vec()),
        );

        messages
    }

    #[test]
    fn test_settings() {
        let new_settings = Settings::new();
        let def_settings = Settings::default();

        assert!(!new_settings.is_alphabetical_help());
        assert!(!new_settings.is_no_legend());
        assert_eq!(new_settings, def_settings);

        let settings = Settings::new().alphabetical_help().no_legend();

        assert!(settings.is_alphabetical_help());
        assert!(settings.is_no_legend());
    }

    #[test]
    fn test_app() {
        let mut app = App::new(vec!["-a", "b"]);

        assert_eq!(app.cli_args(), &["-a".to_string(), "b".to_string()][..]);
        assert!(app.schema().is_empty());
        assert!(!app.is_parsed());

        assert_eq!(app.name, "");
        let name = "foo bar";
        app = app.name(name);
        assert_eq!(app.name, name);

        let version = "1.2.3-beta5";
        assert_eq!(app.version, "");
        app = app.version(version);
        assert_eq!(app.version, version);

        let summary = "my awesome app";
        assert_eq!(app.summary, "");
        app = app.summary(summary);
        assert_eq!(app.summary, summary);

        let help = "this app does something\nthe end\n";
        assert_eq!(app.help, "");
        app = app.help(help);
        assert_eq!(app.help, help);

        let notes = "a b c d e f# g";
        assert_eq!(app.notes, "");
        app = app.notes(notes);
        assert_eq!(app.notes, notes);

        let settings = Settings::new().no_legend();
        assert_eq!(app.settings, Settings::new());

        app = app.settings(settings);
        assert_eq!(app.settings, settings);
    }

    #[test]
    fn test_get_args() {
        let mut args: Vec<String> = env::args().collect();
        args.remove(0);

        assert_eq!(get_args(), args);
        assert_eq!(App::from_env().cli_args(), &args[..]);
    }

    #[test]
    fn test_declaration_errors() {
        let result = App::new(Vec::<String>::new())
            .flag("serve", "")
            .and_then(|app| app.flag("--SERVE", ""));
        assert_eq!(result.err(), Some(Error::DuplicateName("serve".into())));

        let result = App::new(Vec::<String>::new())
            .optional("port", ValueType::Integer, "")
            .and_then(|app| app.flag("-port", ""));
        assert_eq!(result.err(), Some(Error::DuplicateName("port".into())));

        let check = |_: &str, _: &Value| -> Vec<String> { vec![] };

        let result = App::new(Vec::<String>::new()).validator("port", check);
        assert_eq!(result.err(), Some(Error::NotAnOption("port".into())));

        let result = App::new(Vec::<String>::new())
            .optional("port", ValueType::Integer, "")
            .and_then(|app| app.validator("port", check))
            .and_then(|app| app.validator("Port", check));
        assert_eq!(result.err(), Some(Error::DuplicateValidator("port".into())));
    }

    #[test]
    fn test_accessor_errors() {
        let mut app = server_app(&["-write", "out"]);

        // Querying before parsing.
        assert_eq!(app.is_flag_provided("serve"), Err(Error::NotParsed));
        assert_eq!(app.get_option::<i64>("port"), Err(Error::NotParsed));
        assert_eq!(app.provided().err(), Some(Error::NotParsed));
        assert_eq!(app.argument_errors().err(), Some(Error::NotParsed));
        assert!(!app.has_errors());

        app.parse();

        assert_eq!(
            app.is_flag_provided("verbose"),
            Err(Error::UnknownFlag("verbose".into()))
        );
        assert_eq!(
            app.is_flag_provided("port"),
            Err(Error::UnknownFlag("port".into()))
        );
        assert_eq!(
            app.is_option_provided("--Missing"),
            Err(Error::UnknownOption("missing".into()))
        );
        assert_eq!(
            app.get_option::<bool>("serve"),
            Err(Error::UnknownOption("serve".into()))
        );
        assert_eq!(
            app.get_option::<String>("port"),
            Err(Error::TypeMismatch {
                name: "port".into(),
                declared: ValueType::Integer,
                requested: ValueType::Text,
            })
        );
        assert_eq!(
            app.get_option::<f64>("write"),
            Err(Error::TypeMismatch {
                name: "write".into(),
                declared: ValueType::Text,
                requested: ValueType::Number,
            })
        );
    }

    #[test]
    fn test_no_input() {
        // Without a required option, no input is not an error.
        let mut app = App::new(Vec::<String>::new())
            .optional("port", ValueType::Integer, "")
            .unwrap()
            .optional("name", ValueType::Text, "")
            .unwrap()
            .flag("serve", "")
            .unwrap();

        app.parse();

        assert!(!app.has_errors());
        assert!(!app.is_flag_provided("serve").unwrap());
        assert!(!app.is_option_provided("port").unwrap());
        assert_eq!(app.get_option::<i64>("port").unwrap(), 0);
        assert_eq!(app.get_option::<String>("name").unwrap(), "");
        assert_eq!(app.value("port").unwrap(), None);
        assert!(app.provided().unwrap().is_empty());
        assert_eq!(app.provided_command_line().unwrap(), "");

        // A required option with a default is satisfied by it.
        let mut app = App::new(Vec::<String>::new())
            .arg(
                Arg::option("port", ValueType::Integer)
                    .required()
                    .default_value(80),
            )
            .unwrap();

        app.parse();

        assert!(!app.has_errors());
        assert!(app.is_option_provided("port").unwrap());
        assert_eq!(app.get_option::<i64>("port").unwrap(), 80);
    }

    #[test]
    fn test_parse_is_single_shot() {
        let mut app = server_app(&["-serve", "-verbose", "true", "stray"]);

        app.parse();

        let argument_errors = app.argument_errors().unwrap().clone();
        let expectation_errors = app.expectation_errors().unwrap().clone();
        let provided: Vec<(String, Option<Value>)> = app
            .provided()
            .unwrap()
            .into_iter()
            .map(|(n, v)| (n.to_string(), v.cloned()))
            .collect();

        app.parse().parse();

        assert!(app.is_parsed());
        assert_eq!(app.argument_errors().unwrap(), &argument_errors);
        assert_eq!(app.expectation_errors().unwrap(), &expectation_errors);

        let provided_again: Vec<(String, Option<Value>)> = app
            .provided()
            .unwrap()
            .into_iter()
            .map(|(n, v)| (n.to_string(), v.cloned()))
            .collect();
        assert_eq!(provided_again, provided);
    }

    #[test]
    fn test_dash_prefixes_are_equivalent() {
        let cli_args = &[
            vec!["-port", "3000", "-serve", "-write", "w"],
            vec!["--port", "3000", "--serve", "--write", "w"],
            vec!["--port", "3000", "-serve", "--write", "w"],
        ];

        let mut results = Vec::new();

        for args in cli_args {
            let mut app = server_app(args);
            app.parse();

            assert!(!app.has_errors(), "args: {:?}", args);

            results.push((
                app.get_option::<i64>("port").unwrap(),
                app.is_flag_provided("serve").unwrap(),
                app.provided_command_line().unwrap(),
            ));
        }

        assert!(results.iter().all(|r| *r == results[0]), "{:?}", results);
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut app = App::new(vec!["-PORT", "8080", "-Serve"])
            .optional("Port", ValueType::Integer, "")
            .unwrap()
            .flag("SERVE", "")
            .unwrap();

        app.parse();

        assert!(!app.has_errors());
        assert_eq!(app.get_option::<i64>("port").unwrap(), 8080);
        assert_eq!(app.get_option::<i64>("PORT").unwrap(), 8080);
        assert_eq!(app.get_option::<i64>(" --Port ").unwrap(), 8080);
        assert!(app.is_flag_provided("serve").unwrap());
        assert!(app.is_flag_provided("-SeRvE").unwrap());
    }

    #[test]
    fn test_provided_in_declaration_order() {
        let mut app = App::new(vec!["-b", "2", "-flag", "-a", "1"])
            .optional("a", ValueType::Integer, "")
            .unwrap()
            .flag("flag", "")
            .unwrap()
            .optional("b", ValueType::Integer, "")
            .unwrap()
            .flag("unused", "")
            .unwrap();

        app.parse();

        assert_eq!(
            app.provided().unwrap(),
            vec![
                ("a", Some(&Value::Integer(1))),
                ("flag", None),
                ("b", Some(&Value::Integer(2))),
            ]
        );

        assert_eq!(app.provided_args().unwrap(), vec!["-a", "1", "-flag", "-b", "2"]);
    }

    #[test]
    fn test_defaults_are_provided() {
        let mut app = server_app(&["-write", "out"]);

        app.parse();

        assert!(!app.has_errors());
        assert!(app.is_option_provided("port").unwrap());
        assert_eq!(app.get_option::<i64>("port").unwrap(), 1337);
        assert_eq!(app.value("port").unwrap(), Some(&Value::Integer(1337)));
        assert_eq!(
            app.provided().unwrap(),
            vec![
                ("write", Some(&Value::from("out"))),
                ("port", Some(&Value::Integer(1337))),
            ]
        );
    }

    #[test]
    fn test_provided_command_line() {
        let when = NaiveDate::from_ymd_opt(2021, 3, 4)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        let mut app = App::new(vec![
            "-title",
            "Say \"hi\"",
            "-when",
            "4 March 2021 10:30",
            "-ratio",
            "0.5",
            "-debug",
            "yes",
            "-serve",
        ])
        .optional("title", ValueType::Text, "")
        .unwrap()
        .optional("when", ValueType::DateTime, "")
        .unwrap()
        .optional("ratio", ValueType::Number, "")
        .unwrap()
        .optional("debug", ValueType::Boolean, "")
        .unwrap()
        .flag("serve", "")
        .unwrap();

        app.parse();

        assert!(!app.has_errors());
        assert_eq!(app.get_option::<NaiveDateTime>("when").unwrap(), when);
        assert!(app.get_option::<bool>("debug").unwrap());
        assert_eq!(
            app.provided_command_line().unwrap(),
            r#"-title "Say \"hi\"" -when "2021-03-04T10:30:00" -ratio 0.5 -debug true -serve"#
        );
    }

    #[test]
    fn test_round_trip() {
        fn declare<'a>(cli_args: Vec<String>) -> App<'a> {
            App::new(cli_args)
                .optional("title", ValueType::Text, "")
                .unwrap()
                .optional("port", ValueType::Integer, "")
                .unwrap()
                .optional("ratio", ValueType::Number, "")
                .unwrap()
                .optional("debug", ValueType::Boolean, "")
                .unwrap()
                .optional("when", ValueType::DateTime, "")
                .unwrap()
                .arg(Arg::option("level", ValueType::Integer).default_value(3))
                .unwrap()
                .flag("serve", "")
                .unwrap()
                .flag("quiet", "")
                .unwrap()
        }

        let cli_args = vec![
            "-serve",
            "-when",
            "2021-03-04 05:06:07Z",
            "-Title",
            "Site Title",
            "-ratio",
            "2.5e3",
            "-port",
            "3000",
            "-debug",
            "OFF",
        ];

        let mut first = declare(cli_args.iter().map(|s| s.to_string()).collect());
        first.parse();
        assert!(!first.has_errors(), "{:?}", first.argument_errors());

        let mut second = declare(first.provided_args().unwrap());
        second.parse();
        assert!(!second.has_errors(), "{:?}", second.argument_errors());

        assert_eq!(first.provided().unwrap(), second.provided().unwrap());
        assert_eq!(
            first.provided_command_line().unwrap(),
            second.provided_command_line().unwrap()
        );
    }

    #[test]
    fn test_scenario_missing_required_and_unknown_option() {
        let mut app = server_app(&["-serve", "-verbose", "true"]);

        app.parse();

        assert!(app.has_errors());
        assert!(app.is_flag_provided("serve").unwrap());
        assert_eq!(app.get_option::<i64>("port").unwrap(), 1337);

        let argument_errors = app.argument_errors().unwrap();
        assert_eq!(argument_errors.message_count(), 1);
        assert_eq!(
            argument_errors.get(2),
            Some(&["unknown option: verbose".to_string()][..])
        );

        let expectation_errors = app.expectation_errors().unwrap();
        assert_eq!(expectation_errors.message_count(), 1);
        assert_eq!(
            expectation_errors.get("write"),
            Some(&["write is required".to_string()][..])
        );
    }

    #[test]
    fn test_scenario_bad_datetime() {
        let mut app = App::new(vec!["-dtm", "notadate"])
            .required("dtm", ValueType::DateTime, "when to run")
            .unwrap();

        app.parse();

        assert!(app.has_errors());
        assert!(!app.is_option_provided("dtm").unwrap());
        assert!(app.expectation_errors().unwrap().is_empty());

        let argument_errors = app.argument_errors().unwrap();
        assert_eq!(argument_errors.message_count(), 1);

        let (index, messages) = argument_errors.iter().next().unwrap();
        assert_eq!(index, 1);
        assert_eq!(messages, &["expected a value of type datetime: dtm".to_string()][..]);
    }

    #[test]
    fn test_scenario_unnamed_arguments() {
        let mut app = App::new(vec!["-", "1", "-a", "-"])
            .flag("a", "")
            .unwrap();

        app.parse();

        assert!(app.is_flag_provided("a").unwrap());
        assert!(app.expectation_errors().unwrap().is_empty());

        let argument_errors: Vec<(usize, Vec<String>)> = app
            .argument_errors()
            .unwrap()
            .iter()
            .map(|(i, m)| (i, m.to_vec()))
            .collect();

        assert_eq!(
            argument_errors,
            vec![
                (1, vec!["option received with no name".to_string()]),
                (4, vec!["flag received with no name".to_string()]),
            ]
        );
    }

    #[test]
    fn test_scenario_custom_validator() {
        let mut app = App::new(vec!["-filename", "out.txt"])
            .optional("filename", ValueType::Text, "CSV file to write")
            .unwrap()
            .validator("filename", |name: &str, value: &Value| -> Vec<String> {
                if value.to_string().ends_with(".csv") {
                    vec![]
                } else {
                    vec![format!("{} must have a .csv extension", name)]
                }
            })
            .unwrap();

        app.parse();

        assert!(app.has_errors());
        assert!(app.argument_errors().unwrap().is_empty());

        let expectation_errors = app.expectation_errors().unwrap();
        assert_eq!(expectation_errors.message_count(), 1);

        let messages = expectation_errors.get("filename").unwrap();
        assert!(messages[0].contains("filename"));

        // The value is still available.
        assert_eq!(app.get_option::<String>("filename").unwrap(), "out.txt");
    }

    #[test]
    fn test_scenario_mixed_errors() {
        let mut app = server_app(&[
            "-run",
            "data",
            "Site Title",
            "-serve",
            "-ignore",
            "-port",
            "3000",
        ]);

        app.parse();

        assert_eq!(app.get_option::<i64>("port").unwrap(), 3000);
        assert!(app.is_flag_provided("serve").unwrap());

        assert_eq!(
            all_messages(&app),
            vec![
                "unknown option: run",
                "unexpected value: Site Title",
                "unknown flag: ignore",
                "write is required",
            ]
        );
    }
}
