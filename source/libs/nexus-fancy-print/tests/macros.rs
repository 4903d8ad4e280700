// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Severity macro output through the `to:` writer form
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Unstable
//!
//! TEST_SCOPE:
//!   - Call-site capture (file name and line of the invocation)
//!   - Tag text and column layout per severity
//!   - Payload concatenation order
//!   - Compiled-out severities write nothing
//!
//! No config is installed in this binary, so the compiled configuration
//! applies.

use nexus_fancy_print::{f_debug, f_error, f_info, f_success, f_warning, Severity, RESET};

fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("utf8 output")
}

#[cfg(all(feature = "info-logs", feature = "fancy", feature = "color"))]
#[test]
fn info_line_matches_the_documented_example() {
    let mut out = Vec::new();
    let line = line!() + 1;
    f_info!(to: &mut out, "There are all types of print types possible: ").unwrap();
    let out = text(out);

    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with(Severity::Info.color()));
    assert!(out.contains("INFO"));
    assert!(out.contains(&format!("macros.rs:{line}")));
    assert!(out.contains("There are all types of print types possible: "));
    assert!(out.ends_with(&format!("{RESET}\n")));
}

#[cfg(all(
    feature = "debug-logs",
    feature = "warning-logs",
    feature = "error-logs",
    feature = "info-logs",
    feature = "success-logs",
    feature = "fancy"
))]
#[test]
fn every_severity_prints_its_tag_and_call_site() {
    let mut out = Vec::new();
    let first = line!() + 1;
    f_debug!(to: &mut out, "d").unwrap();
    f_warning!(to: &mut out, "w").unwrap();
    f_error!(to: &mut out, "e").unwrap();
    f_info!(to: &mut out, "i").unwrap();
    f_success!(to: &mut out, "s").unwrap();
    let out = text(out);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    for (offset, (line, severity)) in lines.iter().zip(Severity::ALL).enumerate() {
        assert!(line.contains(severity.tag()), "{line:?} lacks {severity}");
        let site = format!("macros.rs:{}", first + offset as u32);
        assert!(line.contains(&site), "{line:?} lacks {site}");
    }
}

#[cfg(all(feature = "info-logs", feature = "fancy"))]
#[test]
fn extra_values_follow_the_message_without_separators() {
    let mut out = Vec::new();
    let count = 10;
    f_info!(to: &mut out, "integers: ", count, '/', 2.5, "!").unwrap();
    let out = text(out);
    let payload = out.trim_end_matches('\n').trim_end_matches(RESET);
    assert!(payload.ends_with("integers: 10/2.5!"), "{payload:?}");
}

#[cfg(all(feature = "success-logs", feature = "fancy"))]
#[test]
fn trailing_comma_is_accepted() {
    let mut out = Vec::new();
    f_success!(to: &mut out, "done", 1,).unwrap();
    assert!(text(out).contains("done1"));
}

#[cfg(all(feature = "warning-logs", not(feature = "fancy")))]
#[test]
fn plain_build_prints_only_the_payload() {
    let mut out = Vec::new();
    f_warning!(to: &mut out, "Warnings are nicely visible", 1).unwrap();
    assert_eq!(text(out), "Warnings are nicely visible1\n");
}

#[cfg(all(feature = "error-logs", feature = "fancy", not(feature = "color")))]
#[test]
fn colorless_build_has_no_escapes() {
    let mut out = Vec::new();
    f_error!(to: &mut out, "Errors are even more visible").unwrap();
    let out = text(out);
    assert!(out.contains("ERROR"));
    assert!(!out.contains('\x1b'));
}

#[cfg(not(feature = "debug-logs"))]
#[test]
fn compiled_out_severity_writes_nothing() {
    let mut out = Vec::new();
    f_debug!(to: &mut out, "This is a fancy debug message!").unwrap();
    assert!(out.is_empty());
}

#[test]
fn stdout_form_is_a_statement() {
    f_info!("stdout form ", 1);
    f_debug!("stdout form");
}
