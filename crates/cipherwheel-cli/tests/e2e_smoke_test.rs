use std::fs;

use tempfile::tempdir;

use cipherwheel_cli::{Args, Profile};

fn args_for(output: &str, profile: Profile) -> Args {
    Args {
        output: output.to_string(),
        profile,
        config: None,
        log_level: "off".to_string(),
    }
}

fn assert_well_formed(path: &str) {
    let content = fs::read_to_string(path).expect("output file should exist");

    assert!(content.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(content.trim_end().ends_with("</svg>"));
    assert!(content.contains(r#"fill="white""#), "missing background");
    assert!(content.contains("<path"), "missing sector outlines");
    assert!(
        content.contains("&#65;"),
        "characters must be numeric references"
    );
    assert!(
        !content.contains("&amp;#"),
        "numeric references must not be escaped"
    );
}

#[test]
fn e2e_smoke_test_dial_profile() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("dial.svg");
    let output = output.to_string_lossy();

    cipherwheel_cli::run(&args_for(&output, Profile::Dial)).expect("dial profile should render");

    assert_well_formed(&output);

    // Pixel canvas, no page extras
    let content = fs::read_to_string(output.as_ref()).unwrap();
    assert!(content.contains(r#"width="520.000""#));
    assert!(!content.contains("<circle"));
}

#[test]
fn e2e_smoke_test_a4_profile() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("disk.svg");
    let output = output.to_string_lossy();

    cipherwheel_cli::run(&args_for(&output, Profile::A4)).expect("a4 profile should render");

    assert_well_formed(&output);

    let content = fs::read_to_string(output.as_ref()).unwrap();
    assert!(content.contains(r#"width="210mm""#));
    assert!(content.contains(r#"viewBox="0 0 210 297""#));
    // Separator circle and center hole
    assert_eq!(content.matches("<circle").count(), 2);
    // The second ring's space character carries the home-position notch
    assert!(content.contains("&#32;"));
}

#[test]
fn e2e_smoke_test_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("wheel.toml");
    fs::write(
        &config_path,
        r#"
            outer_diameter = 100.0
            font_size = 10.0

            [[rings]]
            text = "AB"
            radial_width = 20.0
        "#,
    )
    .unwrap();

    let output = temp_dir.path().join("custom.svg");
    let output = output.to_string_lossy();

    let mut args = args_for(&output, Profile::Dial);
    args.config = Some(config_path.to_string_lossy().to_string());

    cipherwheel_cli::run(&args).expect("config file should render");
    assert_well_formed(&output);
}

#[test]
fn e2e_invalid_config_leaves_no_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("wheel.toml");
    fs::write(
        &config_path,
        r#"
            outer_diameter = 10.0
            font_size = 10.0

            [[rings]]
            text = "AB"
            radial_width = 20.0
        "#,
    )
    .unwrap();

    let output = temp_dir.path().join("never.svg");

    let mut args = args_for(&output.to_string_lossy(), Profile::Dial);
    args.config = Some(config_path.to_string_lossy().to_string());

    assert!(cipherwheel_cli::run(&args).is_err());
    assert!(!output.exists(), "invalid config must not produce output");
}
