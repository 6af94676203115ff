use punchclock::config::Config;
use punchclock::errors::AppError;
use punchclock::utils::time::{Clock, DEFAULT_TIMESTAMP_FORMAT, LocalClock, check_format};
use predicates::str::contains;
use std::fs;

mod common;
use common::{pc, setup_data_dir};

#[test]
fn test_timestamp_format_is_checked() {
    assert!(check_format(DEFAULT_TIMESTAMP_FORMAT).is_ok());
    assert!(check_format("%Y-%m-%d %H:%M").is_ok());

    let dir = setup_data_dir("cfg_validate");
    let mut cfg = Config::in_dir(&dir);
    assert!(cfg.validate().is_ok());

    cfg.timestamp_format = "%Q".to_string();
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_local_clock_survives_bad_format() {
    let stamp = LocalClock::new("%Q").now();
    assert_eq!(stamp.len(), "10/19/26 09:00:00".len());
}

#[test]
fn test_bad_format_in_config_file_is_reported() {
    let home = setup_data_dir("cfg_bad_format");
    let conf_dir = home.join(".punchclock");
    fs::create_dir_all(&conf_dir).unwrap();

    let mut cfg = Config::in_dir(&home);
    cfg.timestamp_format = "%Q".to_string();
    fs::write(conf_dir.join("punchclock.conf"), cfg.to_yaml().unwrap()).unwrap();

    pc().env("HOME", &home)
        .args(["clock-in", "--id", "2039485"])
        .assert()
        .failure()
        .stderr(contains("timestamp_format"));
}
