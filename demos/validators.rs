// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to check option values with custom validators.
use std::io;
use std::process::exit;

use apv::{App, Result, Validator, Value, ValueType};

/// Validator that only accepts numbers within a range.
#[derive(Clone, Debug)]
struct Range {
    min: f64,
    max: f64,
}

impl Validator for Range {
    fn validate(&self, name: &str, value: &Value) -> Vec<String> {
        let n = match value {
            Value::Number(n) => *n,
            Value::Integer(i) => *i as f64,
            _ => return vec![format!("{} must be a number", name)],
        };

        if n < self.min || n > self.max {
            vec![format!(
                "{} must be between {} and {} (got {})",
                name, self.min, self.max, n
            )]
        } else {
            vec![]
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let mut app = App::from_env()
        .name("validators")
        .required("filename", ValueType::Text, "CSV file to write")?
        .optional("ratio", ValueType::Number, "sampling ratio")?
        .optional("workers", ValueType::Integer, "number of worker threads")?
        .validator("filename", |name: &str, value: &Value| -> Vec<String> {
            let mut problems = Vec::new();
            let filename = value.to_string();

            if !filename.ends_with(".csv") {
                problems.push(format!("{} must have a .csv extension", name));
            }

            if filename.contains(' ') {
                problems.push(format!("{} must not contain spaces", name));
            }

            problems
        })?
        .validator("ratio", Range { min: 0.0, max: 1.0 })?
        .validator("workers", Range { min: 1.0, max: 64.0 })?;

    app.parse();

    if app.has_errors() {
        app.generate_errors(&mut io::stderr())?;

        exit(1);
    }

    for (name, value) in app.provided()? {
        match value {
            Some(value) => println!("INFO: {} = {}", name, value),
            None => println!("INFO: {}", name),
        }
    }

    Ok(())
}
