mod common;

use tally::config::{Config, ConfigError};

#[test]
fn full_config_parses() {
    let (_dir, path) = common::temp_config(
        r#"
[defaults]
count = 3
input = "seed"
color = "react-blue"
dark_mode = false

[view]
input_placeholder = "nothing typed"
count_placeholder = "zero"
tick_rate_ms = 100

[replay]
strict = true

[logging]
level = "debug"
file = "/tmp/tally-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let initial = config.defaults.initial_state();
    assert_eq!(initial.count, 3);
    assert_eq!(initial.input, "seed");
    assert_eq!(initial.color, "react-blue");
    assert!(!initial.dark_mode);
    assert_eq!(config.view.input_placeholder, "nothing typed");
    assert_eq!(config.view.tick_rate_ms, 100);
    assert!(config.replay.strict);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn partial_config_fills_defaults() {
    let (_dir, path) = common::temp_config("[defaults]\ncount = -2\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.count, -2);
    assert!(config.defaults.dark_mode);
    assert_eq!(config.view.input_placeholder, "output");
    assert_eq!(config.view.tick_rate_ms, 250);
    assert!(!config.replay.strict);
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = common::temp_config("[defaults\ncount = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn wrong_field_type_is_parse_error() {
    let (_dir, path) = common::temp_config("[defaults]\ndark_mode = \"yes\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn tick_rate_out_of_range_fails_validation() {
    let (_dir, path) = common::temp_config("[view]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn unknown_log_level_fails_validation() {
    let (_dir, path) = common::temp_config("[logging]\nlevel = \"loud\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("loud"));
}

#[test]
fn missing_explicit_file_is_read_error() {
    let err = Config::load_from(std::path::Path::new("/nonexistent/tally/config.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn config_path_ends_with_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("tally/config.toml"));
}

#[test]
fn max_count_default_seeds_reversible_state() {
    use tally::ui::board::{BoardIntent, BoardReducer};
    use tally::ui::mvi::Reducer;

    let (_dir, path) = common::temp_config("[defaults]\ncount = 9223372036854775807\n");
    let config = Config::load_from(&path).unwrap();
    let initial = config.defaults.initial_state();
    assert_eq!(initial.count, i64::MAX);

    let next = BoardReducer::reduce(initial.clone(), BoardIntent::Increment);
    let next = BoardReducer::reduce(next, BoardIntent::Decrement);
    assert_eq!(next, initial);
}
