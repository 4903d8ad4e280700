// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Severity tags and their build-time bindings (color, enable flag).

use core::fmt;

/// ANSI sequence that clears any color or style set by a severity.
pub const RESET: &str = "\x1b[0m";

/// Label attached to every fancy line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Warning,
    Error,
    Info,
    Success,
}

impl Severity {
    pub const ALL: [Severity; 5] =
        [Severity::Debug, Severity::Warning, Severity::Error, Severity::Info, Severity::Success];

    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
        }
    }

    /// Escape sequence written before the tag when color is on.
    pub const fn color(self) -> &'static str {
        match self {
            Severity::Debug => "\x1b[35m",
            Severity::Warning => "\x1b[93;3m",
            Severity::Error => "\x1b[31;1m",
            Severity::Info => "\x1b[37m",
            Severity::Success => "\x1b[32m",
        }
    }

    /// Whether the matching `*-logs` feature was enabled when this crate was
    /// built.
    ///
    /// Must stay a `const fn` in this crate: `cfg!` inside an exported macro
    /// would test the caller's features instead.
    #[inline(always)]
    pub const fn compiled_in(self) -> bool {
        match self {
            Severity::Debug => cfg!(feature = "debug-logs"),
            Severity::Warning => cfg!(feature = "warning-logs"),
            Severity::Error => cfg!(feature = "error-logs"),
            Severity::Info => cfg!(feature = "info-logs"),
            Severity::Success => cfg!(feature = "success-logs"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}
