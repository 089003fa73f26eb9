//! # Error Tests
//!
//! Display formatting and conversions of `SimError`.

use std::error::Error;
use std::io;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rv32sim_core::common::SimError;

#[test]
fn fetch_out_of_bounds_reports_pc_in_hex() {
    let err = SimError::FetchOutOfBounds { pc: 0x0010_0000 };
    assert_eq!(err.to_string(), "PC out of bounds: 0x00100000");
}

#[test]
fn image_too_large_reports_both_sizes() {
    let err = SimError::ImageTooLarge {
        size: 2048,
        capacity: 1024,
    };
    assert_eq!(
        err.to_string(),
        "binary image of 2048 bytes exceeds memory capacity of 1024 bytes"
    );
}

#[test]
fn empty_image_names_the_file() {
    let err = SimError::EmptyImage {
        path: PathBuf::from("prog.bin"),
    };
    assert_eq!(err.to_string(), "binary image 'prog.bin' is empty");
}

#[test]
fn io_error_keeps_its_source() {
    let err = SimError::Io {
        path: PathBuf::from("missing.bin"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    assert!(err.to_string().starts_with("could not read 'missing.bin'"));
    assert!(err.source().is_some());
}

#[test]
fn json_errors_convert_into_config_errors() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SimError::from(json_err);
    assert!(matches!(err, SimError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration:"));
}
