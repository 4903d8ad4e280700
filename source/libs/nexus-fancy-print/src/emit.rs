// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Line rendering. One call renders one line into a buffer and writes it to
//! the destination in a single `write_all`.

use core::fmt;
use std::io::{self, Write};

use crate::config::{self, Config};
use crate::severity::{Severity, RESET};

/// Width of the tag column.
pub const TAG_WIDTH: usize = 10;
/// Width of the `file:line` column.
pub const LOCATION_WIDTH: usize = 32;

/// Values printed after the location, concatenated with no separator.
pub type Payload<'a> = [&'a dyn fmt::Display];

/// Where a log line was issued from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
    label: &'a str,
}

impl<'a> CallSite<'a> {
    pub const fn new(file: &'a str, line: u32, label: &'a str) -> Self {
        Self { file, line, label }
    }

    /// Final component of the source path, for either separator style.
    pub fn file_name(&self) -> &'a str {
        self.file.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(self.file)
    }

    pub fn path(&self) -> &'a str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Module path (macros) or log target (bridge). Not printed.
    pub fn label(&self) -> &'a str {
        self.label
    }
}

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Render first so width/alignment apply to the whole `file:line`.
        let text = format!("{}:{}", self.file_name(), self.line);
        f.pad(&text)
    }
}

/// Writes `tag  file:line  payload` with fixed columns, optionally colored.
pub fn fancy_print<W: Write + ?Sized>(
    out: &mut W,
    severity: Severity,
    site: &CallSite<'_>,
    payload: &Payload<'_>,
    color: bool,
) -> io::Result<()> {
    let mut line = Vec::with_capacity(TAG_WIDTH + LOCATION_WIDTH + 64);
    if color {
        line.extend_from_slice(severity.color().as_bytes());
    }
    write!(line, "{severity:<TAG_WIDTH$}{site:<LOCATION_WIDTH$}")?;
    write_payload(&mut line, payload)?;
    if color {
        line.extend_from_slice(RESET.as_bytes());
    }
    line.push(b'\n');
    out.write_all(&line)?;
    out.flush()
}

/// Writes the payload followed by a newline and nothing else.
pub fn simple_print<W: Write + ?Sized>(out: &mut W, payload: &Payload<'_>) -> io::Result<()> {
    let mut line = Vec::with_capacity(64);
    write_payload(&mut line, payload)?;
    line.push(b'\n');
    out.write_all(&line)?;
    out.flush()
}

fn write_payload(line: &mut Vec<u8>, payload: &Payload<'_>) -> io::Result<()> {
    for value in payload {
        write!(line, "{value}")?;
    }
    Ok(())
}

/// Applies a [`Config`] to each line: drops disabled severities and picks
/// fancy or plain rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Printer {
    config: Config,
}

impl Printer {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Printer over the installed (or compiled) configuration.
    pub fn active() -> Self {
        Self::new(config::active())
    }

    pub const fn config(&self) -> Config {
        self.config
    }

    pub fn write_line<W: Write + ?Sized>(
        &self,
        out: &mut W,
        severity: Severity,
        site: CallSite<'_>,
        payload: &Payload<'_>,
    ) -> io::Result<()> {
        if !self.config.severity_enabled(severity) {
            return Ok(());
        }
        if self.config.fancy {
            fancy_print(out, severity, &site, payload, self.config.color)
        } else {
            simple_print(out, payload)
        }
    }

    /// Writes to stdout. Write errors are dropped.
    pub fn emit(&self, severity: Severity, site: CallSite<'_>, payload: &Payload<'_>) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let _ = self.write_line(&mut lock, severity, site, payload);
    }
}
