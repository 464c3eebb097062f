// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Crate for parsing typed, validated command-line arguments.
//!
//! If you want lots of extra features, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! This crate is used to parse command-line arguments into typed values.
//! You declare the flags and options your program supports, parse the
//! command-line once, then query the result.
//!
//! Parsing never fails: every problem found on the command-line is
//! recorded and can be reported to the user in one go. Only incorrect use
//! of the API (such as declaring the same name twice) returns an [Error].
//!
//! # Quickstart
//!
//! > **Note:** If you are not familiar with command-line handling,
//! > see the [terminology](#terminology) section.
//!
//! 1. Create an [App] for the command-line arguments:
//!
//!    ```rust
//!    # use apv::App;
//!    #
//!    // Normally, you would call App::from_env().
//!    let app = App::new(vec!["-port", "8080", "-serve"]);
//!    ```
//!
//! 1. Declare the options and flags you wish to support:
//!
//!    ```rust
//!    # use apv::{App, Arg, Result, ValueType};
//!    #
//!    # fn main() -> Result<()> {
//!    # let app = App::new(vec!["-port", "8080", "-serve"]);
//!    #
//!    let app = app
//!        .required("write", ValueType::Text, "output directory")?
//!        .arg(Arg::option("port", ValueType::Integer).default_value(1337))?
//!        .flag("serve", "start a web server")?;
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Call the `parse()` method on the [App] variable:
//!
//!    ```rust
//!    # use apv::{App, Arg, Result, ValueType};
//!    #
//!    # fn main() -> Result<()> {
//!    # let mut app = App::new(vec!["-port", "8080", "-serve"])
//!    #     .required("write", ValueType::Text, "output directory")?
//!    #     .arg(Arg::option("port", ValueType::Integer).default_value(1337))?
//!    #     .flag("serve", "start a web server")?;
//!    #
//!    app.parse();
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Check for errors and query the values:
//!
//!    ```rust
//!    # use apv::{App, Arg, Result, ValueType};
//!    #
//!    # fn main() -> Result<()> {
//!    # let mut app = App::new(vec!["-port", "8080", "-serve"])
//!    #     .required("write", ValueType::Text, "output directory")?
//!    #     .arg(Arg::option("port", ValueType::Integer).default_value(1337))?
//!    #     .flag("serve", "start a web server")?;
//!    #
//!    # app.parse();
//!    #
//!    // "-write" was not specified.
//!    assert!(app.has_errors());
//!
//!    let port: i64 = app.get_option("port")?;
//!    assert_eq!(port, 8080);
//!
//!    assert!(app.is_flag_provided("serve")?);
//!    # Ok(())
//!    # }
//!    ```
//!
//! # Examples
//!
//! Below is a full example showing how to write a program that checks its
//! command-line and reports all the problems found.
//!
//! ```rust
//! use apv::{App, Arg, Result, Value, ValueType};
//!
//! fn main() -> Result<()> {
//!     let mut app = App::new(vec!["-filename", "out.txt", "-verbose", "-count", "many"])
//!         .name("my app")
//!         .optional("filename", ValueType::Text, "CSV file to write")?
//!         .arg(Arg::option("count", ValueType::Integer).default_value(1))?
//!         .flag("debug", "enable debug")?
//!         .validator("filename", |name: &str, value: &Value| -> Vec<String> {
//!             if value.to_string().ends_with(".csv") {
//!                 vec![]
//!             } else {
//!                 vec![format!("{} must have a .csv extension", name)]
//!             }
//!         })?;
//!
//!     app.parse();
//!
//!     if app.has_errors() {
//!         let mut output = Vec::new();
//!         app.generate_errors(&mut output)?;
//!
//!         let report = String::from_utf8_lossy(&output);
//!
//!         assert!(report.contains("[3] unknown flag: verbose"));
//!         assert!(report.contains("[4] expected a value of type integer: count"));
//!         assert!(report.contains("filename: filename must have a .csv extension"));
//!     }
//!
//!     // The bad value was ignored so the default applies.
//!     assert_eq!(app.get_option::<i64>("count")?, 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example serve -- -write /tmp/site -port 3000 -serve
//! $ RUST_LOG=apv=trace cargo run --example validators -- -filename data.txt -ratio 2
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! - An "argument" is a value passed to a program on the command-line.
//!
//!   > **Note:** A single or double quoted string counts as _one_ argument,
//!   > even if that string comprises more than one word (this magic is handled
//!   > by the shell).
//!
//! - A "flag" is an argument that starts with a dash (`-` or `--`) and is
//!   not followed by a value, for example `-serve`. A flag is either
//!   provided or it isn't.
//!
//! - An "option" is an argument that starts with a dash and is followed by
//!   a value, for example `-port 8080`. Each option is declared with a
//!   [ValueType] and its value is converted to that type.
//!
//! - An argument that does not start with a dash is a value. It belongs to
//!   the argument immediately before it, if that argument starts with a
//!   dash. Otherwise it is an "unexpected value".
//!
//! ### Example of argument types
//!
//! Assume a program that is run as follows:
//!
//! ```bash
//! $ myprog -write /tmp/site "hello, world" -serve -port -5
//! ```
//!
//! The arguments are interpreted as follows:
//!
//! ```text
//! 1: '-write /tmp/site' # An option ('write') with value '/tmp/site'.
//! 3: 'hello, world'     # An unexpected value.
//! 4: '-serve'           # A flag.
//! 5: '-port'            # A flag, since the next argument starts with a dash.
//! 6: '-5'               # A flag called '5'.
//! ```
//!
//! ## Errors
//!
//! Problems with the command-line are recorded in two groups:
//!
//! - [ArgumentErrors]: problems with the arguments themselves, such as
//!   unknown names, unexpected values and values that are not valid for the
//!   declared type. These are ordered by position on the command-line.
//!
//! - [ExpectationErrors]: declared options that failed a requirement, such
//!   as a required option that was not specified, or a value rejected by a
//!   custom [Validator]. These are ordered by declaration.
//!
//! # Summary of features and behaviour
//!
//! - Simple and intuitive ("ergonomic") API.
//! - Names are case insensitive and `-name` and `--name` are equivalent.
//! - Option values are typed: text, integer, number, boolean and date-time.
//! - Options can be defined as mandatory.
//! - Options can have a default value.
//! - Options can have a custom validator.
//! - All problems are reported, not just the first one.
//! - If an option is specified more than once, the last valid value wins.
//! - The provided values can be turned back into a command-line.
//! - Automatically generates help / usage statement.
//! - Logs diagnostics with [`tracing`](https://crates.io/crates/tracing).
//!
//! # Limitations
//!
//! - Option bundling is not supported.
//! - Positional arguments are not supported.
//!
//!   **Example:** `cp -r src dest` cannot be parsed.
//!
//! - Options and their values must be separated by whitespace.
//!
//!   **Example:** `-port 80` is valid, but `-port=80` is not.
//!
//! - Option values cannot start with a dash.
//!
//!   **Example:** `-offset -5` is parsed as two flags.
//!
//! - Options cannot accept multiple values.

mod app;
mod binder;
mod error;
mod help;
mod report;
mod schema;
mod token;
mod value;

pub use app::{get_args, App, Settings};
pub use error::{Error, Result};
pub use report::{ArgumentErrors, ExpectationErrors};
pub use schema::{Arg, Declaration, Need, Schema, Validator};
pub use value::{coerce, FromValue, Value, ValueType};
