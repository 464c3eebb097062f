// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::io::Write;
use std::path::Path;

use crate::app::App;
use crate::error::Result;
use crate::schema::Declaration;

const USAGE_PREFIX_SPACES: &str = "    ";

const LEGEND: &str = "Options marked (required) must be specified.";

impl<'a> App<'a> {
    /// Generate a help/usage statement from the declared arguments.
    ///
    /// Arguments are listed in declaration order unless
    /// [crate::Settings::alphabetical_help()] is set.
    pub fn generate_help<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut lines = Vec::<String>::new();

        let name = if self.name.is_empty() {
            program_name()
        } else {
            self.name.clone()
        };

        let line = format!("NAME:\n{}{}\n", USAGE_PREFIX_SPACES, name);
        lines.push(line);

        if !self.version.is_empty() {
            let line = format!("VERSION:\n{}{}\n", USAGE_PREFIX_SPACES, self.version);
            lines.push(line);
        }

        if !self.summary.is_empty() {
            let line = format!("SUMMARY:\n{}{}\n", USAGE_PREFIX_SPACES, self.summary.trim());
            lines.push(line);
        }

        lines.push("USAGE:".into());

        let line = format!("{}{} [FLAGS] [OPTIONS]\n", USAGE_PREFIX_SPACES, name);
        lines.push(line);

        //------------------------------------------------------------

        let declarations: Vec<&Declaration> = if self.settings.is_alphabetical_help() {
            self.schema.sorted_by_name()
        } else {
            self.schema.iter().collect()
        };

        lines.push("FLAGS:".into());

        for declaration in declarations.iter().filter(|d| d.is_flag()) {
            let line = format!("{}{}", USAGE_PREFIX_SPACES, declaration);
            lines.push(line);
        }

        //------------------------------------------------------------

        lines.push("\nOPTIONS:".into());

        for declaration in declarations.iter().filter(|d| d.expects_value()) {
            let line = format!("{}{}", USAGE_PREFIX_SPACES, declaration);
            lines.push(line);
        }

        //------------------------------------------------------------

        if !self.help.is_empty() {
            let line = format!("\nHELP:\n\n{}", self.help.trim());
            lines.push(line);
        }

        if !self.notes.is_empty() {
            let line = format!("\nNOTES:\n\n{}", self.notes.trim());
            lines.push(line);
        }

        let have_required = declarations
            .iter()
            .any(|d| d.expects_value() && d.is_required());

        if have_required && !self.settings.is_no_legend() {
            lines.push(format!("\n{}", LEGEND));
        }

        // Join all the lines together, remove white space at either end and
        // finally append a single newline.
        let mut final_lines = lines.join("\n").trim().to_string();
        final_lines.push('\n');

        writeln!(writer, "{}", final_lines)?;

        Ok(())
    }

    /// Write a report of all the problems found on the command-line.
    ///
    /// Argument errors are listed first, ordered by their position on the
    /// command-line, followed by expectation errors in declaration order.
    /// Nothing is written if there are no errors.
    pub fn generate_errors<W: Write>(&self, writer: &mut W) -> Result<()> {
        let argument_errors = self.argument_errors()?;
        let expectation_errors = self.expectation_errors()?;

        let mut lines = Vec::<String>::new();

        if !argument_errors.is_empty() {
            lines.push("ARGUMENT ERRORS:".into());

            for (index, messages) in argument_errors.iter() {
                for msg in messages {
                    lines.push(format!("{}[{}] {}", USAGE_PREFIX_SPACES, index, msg));
                }
            }
        }

        if !expectation_errors.is_empty() {
            if !lines.is_empty() {
                lines.push("".into());
            }

            lines.push("EXPECTATION ERRORS:".into());

            for (name, messages) in expectation_errors.iter() {
                for msg in messages {
                    lines.push(format!("{}{}: {}", USAGE_PREFIX_SPACES, name, msg));
                }
            }
        }

        if lines.is_empty() {
            return Ok(());
        }

        writeln!(writer, "{}", lines.join("\n"))?;

        Ok(())
    }
}

fn program_name() -> String {
    env::args()
        .next()
        .and_then(|p| {
            Path::new(&p)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}
