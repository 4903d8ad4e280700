// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! `log` facade backend. Records from `log::info!` and friends are printed
//! with the same layout as the severity macros.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{CallSite, Printer, Severity};

static LOGGER: FancyLogger = FancyLogger;

/// `log::Log` implementation backed by [`Printer::active`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FancyLogger;

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warning,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        }
    }
}

impl Log for FancyLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        let severity = Severity::from(metadata.level());
        severity.compiled_in() && Printer::active().config().severity_enabled(severity)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let site = CallSite::new(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
            record.target(),
        );
        Printer::active().emit(
            Severity::from(record.level()),
            site,
            &[record.args() as &dyn core::fmt::Display],
        );
    }

    fn flush(&self) {}
}

/// Registers [`FancyLogger`] as the global `log` backend.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}
