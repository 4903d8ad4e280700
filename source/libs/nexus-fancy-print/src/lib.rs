// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Colored, column-aligned stdout prints tagged with `file:line`
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Unstable
//! TEST_COVERAGE: Unit tests per module + `tests/`
//! PUBLIC API: f_debug!/f_warning!/f_error!/f_info!/f_success!, Printer, Config
//! INVARIANTS: One line per call; severities compiled out by feature are no-ops
//!
//! Each macro takes a message followed by any number of `Display` values,
//! which are concatenated without separators:
//!
//! ```text
//! SUCCESS   main.rs:12                      Yes! You succesfully compiled FancyPrint!
//! INFO      main.rs:14                      such as integers: 10
//! ```
//!
//! Cargo features pick what gets printed: `debug-logs`, `warning-logs`,
//! `error-logs`, `info-logs`, `success-logs`, `fancy` (columns, tag and
//! location; plain concatenation when off) and `color`. A [`Config`] loaded at
//! startup may narrow these further, see [`install`].
//!
//! Every macro also accepts a leading `to: writer` to print into any
//! [`std::io::Write`] instead of stdout; that form evaluates to
//! `std::io::Result<()>`.

#![forbid(unsafe_code)]

mod config;
mod emit;
mod severity;

#[cfg(feature = "log-bridge")]
pub mod bridge;

pub use config::{active, install, Config, ConfigError, CONFIG_ENV};
pub use emit::{fancy_print, simple_print, CallSite, Payload, Printer, LOCATION_WIDTH, TAG_WIDTH};
pub use severity::{Severity, RESET};

/// Captures the invoking `file!()`, `line!()` and `module_path!()`.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::core::file!(), ::core::line!(), ::core::module_path!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fancy_log {
    ($severity:expr, to: $out:expr, $($arg:expr),+) => {
        if $severity.compiled_in() {
            $crate::Printer::active().write_line(
                $out,
                $severity,
                $crate::call_site!(),
                &[$(&$arg as &dyn ::core::fmt::Display),+],
            )
        } else {
            ::core::result::Result::<(), ::std::io::Error>::Ok(())
        }
    };
    ($severity:expr, $($arg:expr),+) => {
        if $severity.compiled_in() {
            $crate::Printer::active().emit(
                $severity,
                $crate::call_site!(),
                &[$(&$arg as &dyn ::core::fmt::Display),+],
            );
        }
    };
}

/// Developer-only output, e.g. a variable's value.
#[macro_export]
macro_rules! f_debug {
    (to: $out:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Debug, to: $out, $msg $(, $arg)*)
    };
    ($msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Debug, $msg $(, $arg)*)
    };
}

/// A recoverable problem.
#[macro_export]
macro_rules! f_warning {
    (to: $out:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Warning, to: $out, $msg $(, $arg)*)
    };
    ($msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Warning, $msg $(, $arg)*)
    };
}

/// A non-recoverable problem.
#[macro_export]
macro_rules! f_error {
    (to: $out:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Error, to: $out, $msg $(, $arg)*)
    };
    ($msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Error, $msg $(, $arg)*)
    };
}

/// State changes and other useful information about the running system.
#[macro_export]
macro_rules! f_info {
    (to: $out:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Info, to: $out, $msg $(, $arg)*)
    };
    ($msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Info, $msg $(, $arg)*)
    };
}

/// A critical operation completed.
#[macro_export]
macro_rules! f_success {
    (to: $out:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Success, to: $out, $msg $(, $arg)*)
    };
    ($msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::__fancy_log!($crate::Severity::Success, $msg $(, $arg)*)
    };
}
