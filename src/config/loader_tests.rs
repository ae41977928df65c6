//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_ankiviz_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("ankiviz") && path_str.ends_with("config.toml"),
            "Path should contain 'ankiviz' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("ankiviz_test_config.toml");

    let toml_content = r#"
collection = "/data/collection.anki2"
playback_rate = 50
min_field_count = 30
palette_size = 7
order = "newest-first"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    let config = result
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");
    assert_eq!(
        config.collection,
        Some(PathBuf::from("/data/collection.anki2"))
    );
    assert_eq!(config.playback_rate, Some(50));
    assert_eq!(config.min_field_count, Some(30));
    assert_eq!(config.palette_size, Some(7));
    assert_eq!(config.order, Some(RenderOrder::NewestFirst));
    assert_eq!(config.log_file_path, None);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("ankiviz_test_invalid.toml");
    fs::write(&config_path, "playback_rate = [unclosed").unwrap();

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should return ParseError, got: {:?}",
        result
    );
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("ankiviz_test_unknown_key.toml");
    fs::write(&config_path, "theme = \"monokai\"\n").unwrap();

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn load_config_file_rejects_unknown_order() {
    let config_path = env::temp_dir().join("ankiviz_test_bad_order.toml");
    fs::write(&config_path, "order = \"random\"\n").unwrap();

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
#[serial(config_env)]
fn load_config_with_precedence_prefers_explicit_path() {
    let explicit = env::temp_dir().join("ankiviz_test_explicit.toml");
    let from_env = env::temp_dir().join("ankiviz_test_from_env.toml");
    fs::write(&explicit, "playback_rate = 11\n").unwrap();
    fs::write(&from_env, "playback_rate = 22\n").unwrap();
    env::set_var(CONFIG_ENV, &from_env);

    let result = load_config_with_precedence(Some(explicit.clone()));

    env::remove_var(CONFIG_ENV);
    fs::remove_file(&explicit).ok();
    fs::remove_file(&from_env).ok();

    assert_eq!(result.unwrap().unwrap().playback_rate, Some(11));
}

#[test]
#[serial(config_env)]
fn load_config_with_precedence_uses_env_var() {
    let from_env = env::temp_dir().join("ankiviz_test_env_only.toml");
    fs::write(&from_env, "palette_size = 3\n").unwrap();
    env::set_var(CONFIG_ENV, &from_env);

    let result = load_config_with_precedence(None);

    env::remove_var(CONFIG_ENV);
    fs::remove_file(&from_env).ok();

    assert_eq!(result.unwrap().unwrap().palette_size, Some(3));
}

// ===== merge_config =====

#[test]
fn merge_config_none_returns_defaults() {
    assert_eq!(merge_config(None), Ok(ResolvedConfig::default()));
}

#[test]
fn defaults_match_documented_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.collection, PathBuf::from("collection.anki2"));
    assert_eq!(config.playback_rate.get(), 20);
    assert_eq!(config.min_field_count, 25);
    assert_eq!(config.palette_size.get(), 5);
    assert_eq!(config.order, RenderOrder::FirstSeen);
}

#[test]
fn merge_config_overrides_only_given_fields() {
    let file = ConfigFile {
        playback_rate: Some(40),
        order: Some(RenderOrder::NewestFirst),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file)).unwrap();
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.playback_rate.get(), 40);
    assert_eq!(resolved.order, RenderOrder::NewestFirst);
    assert_eq!(resolved.min_field_count, defaults.min_field_count);
    assert_eq!(resolved.palette_size, defaults.palette_size);
    assert_eq!(resolved.collection, defaults.collection);
}

#[test]
fn merge_config_rejects_zero_rate() {
    let file = ConfigFile {
        playback_rate: Some(0),
        ..ConfigFile::default()
    };
    assert!(matches!(
        merge_config(Some(file)),
        Err(ConfigError::InvalidValue {
            field: "playback_rate",
            ..
        })
    ));
}

#[test]
fn merge_config_rejects_palette_out_of_range() {
    for size in [0, 1, 17, 255] {
        let file = ConfigFile {
            palette_size: Some(size),
            ..ConfigFile::default()
        };
        assert!(
            matches!(
                merge_config(Some(file)),
                Err(ConfigError::InvalidValue {
                    field: "palette_size",
                    ..
                })
            ),
            "palette size {size} should be rejected"
        );
    }
}

#[test]
fn merge_config_rejects_threshold_below_display_fields() {
    let file = ConfigFile {
        min_field_count: Some(7),
        ..ConfigFile::default()
    };
    assert!(matches!(
        merge_config(Some(file)),
        Err(ConfigError::InvalidValue {
            field: "min_field_count",
            ..
        })
    ));

    let file = ConfigFile {
        min_field_count: Some(8),
        ..ConfigFile::default()
    };
    assert_eq!(merge_config(Some(file)).unwrap().min_field_count, 8);
}

// ===== apply_env_overrides =====

#[test]
#[serial(config_env)]
fn env_rate_overrides_config() {
    env::set_var(RATE_ENV, "90");
    let result = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(RATE_ENV);

    assert_eq!(result.unwrap().playback_rate.get(), 90);
}

#[test]
#[serial(config_env)]
fn env_rate_must_be_numeric() {
    env::set_var(RATE_ENV, "fast");
    let result = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(RATE_ENV);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { field: RATE_ENV, .. })
    ));
}

#[test]
#[serial(config_env)]
fn env_unset_leaves_config_unchanged() {
    env::remove_var(RATE_ENV);
    let config = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(config.clone()), Ok(config));
}

// ===== apply_cli_overrides =====

#[test]
fn cli_overrides_take_precedence() {
    let base = merge_config(Some(ConfigFile {
        playback_rate: Some(40),
        collection: Some(PathBuf::from("from-file.anki2")),
        ..ConfigFile::default()
    }))
    .unwrap();

    let resolved = apply_cli_overrides(
        base,
        CliOverrides {
            collection: Some(PathBuf::from("from-cli.jsonl")),
            playback_rate: Some(5),
            palette_size: Some(3),
            ..CliOverrides::default()
        },
    )
    .unwrap();

    assert_eq!(resolved.collection, PathBuf::from("from-cli.jsonl"));
    assert_eq!(resolved.playback_rate.get(), 5);
    assert_eq!(resolved.palette_size.get(), 3);
    assert_eq!(resolved.order, RenderOrder::FirstSeen);
}

#[test]
fn cli_empty_overrides_change_nothing() {
    let config = ResolvedConfig::default();
    assert_eq!(
        apply_cli_overrides(config.clone(), CliOverrides::default()),
        Ok(config)
    );
}

#[test]
fn cli_rejects_invalid_min_fields() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        CliOverrides {
            min_field_count: Some(3),
            ..CliOverrides::default()
        },
    );
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue {
            field: "min_field_count",
            ..
        })
    ));
}
