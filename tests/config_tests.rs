//! Configuration parsing, validation, and file round-trip.

use tongue_switch::config::{Config, SortAxis, EXAMPLE_CONFIG};

#[test]
fn test_example_config_round_trips() {
    let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
    let dumped = serde_yaml::to_string(&config).unwrap();
    let reparsed: Config = serde_yaml::from_str(&dumped).unwrap();
    assert_eq!(reparsed.tracker.players, config.tracker.players);
    assert_eq!(reparsed.debounce.engage_frames, config.debounce.engage_frames);
    assert_eq!(reparsed.calibration.warmup_frames, config.calibration.warmup_frames);
}

#[test]
fn test_file_round_trip() {
    let mut config = Config::default();
    config.tracker.players = 2;
    config.tracker.sort_axis = SortAxis::Horizontal;
    config.debounce.engage_frames = 4;
    config.debounce.release_frames = 2;

    let path = std::env::temp_dir().join("tongue_switch_config_test.yaml");
    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.tracker.players, 2);
    assert_eq!(loaded.tracker.sort_axis, SortAxis::Horizontal);
    assert_eq!(loaded.debounce.engage_frames, 4);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_missing_file_errors() {
    assert!(Config::from_file("/nonexistent/path/config.yaml").is_err());
}

#[test]
fn test_garbage_yaml_errors() {
    let path = std::env::temp_dir().join("tongue_switch_garbage_test.yaml");
    std::fs::write(&path, "tracker: [not, a, mapping").unwrap();
    let result = Config::from_file(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}

#[test]
fn test_validation_rejects_out_of_range() {
    let cases: Vec<(&str, Box<dyn Fn(&mut Config)>)> = vec![
        ("zero players", Box::new(|c| c.tracker.players = 0)),
        ("three players", Box::new(|c| c.tracker.players = 3)),
        ("zero warmup", Box::new(|c| c.calibration.warmup_frames = 0)),
        ("zero margin", Box::new(|c| c.calibration.margin = 0.0)),
        ("negative noise bound", Box::new(|c| c.calibration.max_noise_std_dev = -0.1)),
        ("zero engage", Box::new(|c| c.debounce.engage_frames = 0)),
        ("zero release", Box::new(|c| c.debounce.release_frames = 0)),
        ("release above engage", Box::new(|c| {
            c.debounce.engage_frames = 2;
            c.debounce.release_frames = 3;
        })),
        ("zero hold", Box::new(|c| c.hold_reset.hold_secs = 0.0)),
        ("zero grace", Box::new(|c| c.tracker.grace_period_secs = 0.0)),
        ("timeout under grace", Box::new(|c| {
            c.tracker.grace_period_secs = 3.0;
            c.tracker.slot_timeout_secs = 2.0;
        })),
    ];

    for (name, mutate) in cases {
        let mut config = Config::default();
        mutate(&mut config);
        assert!(config.validate().is_err(), "{name} should be rejected");
    }
}

#[test]
fn test_empty_yaml_is_all_defaults() {
    let config: Config = serde_yaml::from_str("{}").unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.tracker.players, 1);
    assert_eq!(config.tracker.sort_axis, SortAxis::Vertical);
}
