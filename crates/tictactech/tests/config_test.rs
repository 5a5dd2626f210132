//! Configuration files on disk.

use std::io::Write;
use tictactech::{AppConfig, ThemeBook};

#[test]
fn test_load_full_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[board]
cell_size = 8.0
centered = false

[animation]
grow_duration = 0.35
grow_easing = "linear"
win_blinks = 5
win_blink_duration = 1.5

[display]
theme = "colorful"
fps = 30

[sound]
enabled = false
"#
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    config.validate(&ThemeBook::builtin()).unwrap();

    assert_eq!(*config.board().cell_size(), 8.0);
    assert!(!config.board().centered());
    assert_eq!(*config.animation().win_blinks(), 5);
    assert_eq!(config.display().theme(), "colorful");
    assert_eq!(*config.display().fps(), 30);
    assert!(!config.sound().enabled());
}

#[test]
fn test_round_trip_through_toml() {
    let mut config = AppConfig::default();
    config.set_theme("dark");
    config.set_fps(24);

    let text = toml::to_string(&config).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tictactech.toml");
    std::fs::write(&path, text).unwrap();

    assert_eq!(AppConfig::from_file(&path).unwrap(), config);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_stored_geometry_rejects_zero_cell_size() {
    use tictactech_core::{Geometry, Vec2};

    let stored = |cell_size: &str| format!("cell_size = {cell_size}\n[origin]\nx = 4.0\ny = 6.0");

    let geometry: Geometry = toml::from_str(&stored("12.0")).unwrap();
    assert_eq!(Some(geometry), Geometry::new(Vec2::new(4.0, 6.0), 12.0).ok());

    let err = toml::from_str::<Geometry>(&stored("0.0")).unwrap_err();
    assert!(err.to_string().contains("Invalid cell size"), "{err}");
}
