// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how a site generator might check its command-line.
///
/// Try running with `RUST_LOG=apv=debug` to see what the parser is doing.
use std::io;
use std::process::exit;

use apv::{App, Arg, Result, Settings, ValueType};
use chrono::NaiveDateTime;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let mut app = App::from_env()
        .name("serve")
        .version("0.2.0")
        .summary("Build a site and optionally serve it")
        .notes("Names are case insensitive and may start with '-' or '--'.")
        .settings(Settings::new().alphabetical_help())
        .required("write", ValueType::Text, "directory to write the site to")?
        .arg(
            Arg::option("port", ValueType::Integer)
                .help("port to serve the site on")
                .default_value(1337),
        )?
        .arg(
            Arg::option("title", ValueType::Text)
                .help("site title")
                .default_value("My Site"),
        )?
        .optional("since", ValueType::DateTime, "only build pages changed since this time")?
        .flag("serve", "start a web server once the site is built")?
        .flag("help", "show this help")?;

    app.parse();

    if app.is_flag_provided("help")? {
        return app.generate_help(&mut io::stdout());
    }

    if app.has_errors() {
        app.generate_errors(&mut io::stderr())?;
        eprintln!();
        app.generate_help(&mut io::stderr())?;

        exit(1);
    }

    let write: String = app.get_option("write")?;
    let port: i64 = app.get_option("port")?;
    let title: String = app.get_option("title")?;

    println!("INFO: writing {:?} to {}", title, write);

    if app.is_option_provided("since")? {
        let since: NaiveDateTime = app.get_option("since")?;
        println!("INFO: only pages changed since {}", since);
    }

    if app.is_flag_provided("serve")? {
        println!("INFO: serving on port {}", port);
    }

    println!("INFO: command-line: {}", app.provided_command_line()?);

    Ok(())
}
