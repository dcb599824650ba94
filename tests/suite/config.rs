//! Config file to application options.

use std::fs;

use nncalc_engine::{App, CalcConfig, ConfigError};
use tempfile::tempdir;

#[test]
fn config_file_options_reach_the_app() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\nascii_only = true\nhigh_contrast = true\nreduced_motion = true\n",
    )
    .unwrap();

    let config = CalcConfig::load_from(&path).unwrap();
    let app = App::new(CalcConfig::ui_options(config.as_ref()));
    let options = app.ui_options();
    assert!(options.ascii_only);
    assert!(options.high_contrast);
    assert!(options.reduced_motion);
}

#[test]
fn unknown_sections_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[keys]\nquit = \"x\"\n\n[app]\nhigh_contrast = true\n").unwrap();

    let config = CalcConfig::load_from(&path).unwrap().unwrap();
    assert!(config.app.is_some_and(|app| app.high_contrast));
}

#[test]
fn unreadable_config_reports_its_path() {
    let dir = tempdir().unwrap();
    // a directory exists but cannot be read as a file
    let err = CalcConfig::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), dir.path());
}
