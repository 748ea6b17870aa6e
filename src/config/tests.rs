use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.terminal.profile, Profile::Cascade);
    assert!(config.terminal.preferred.is_none());
    assert!(config.fallback.integrated);
    assert_eq!(config.log.level, "info");
}

#[test]
fn test_missing_file_loads_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::load_from(&tmp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        "[terminal]\nprofile = \"single\"\ncommand = \"kitty --directory {dir}\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.terminal.profile, Profile::Single);
    assert_eq!(config.terminal.command, "kitty --directory {dir}");
    assert!(config.fallback.integrated);
}

#[test]
fn test_save_then_load() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.terminal.preferred = Some("wezterm start --cwd {dir}".into());
    config.fallback.integrated = false;

    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[terminal\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config at"));
}

#[test]
fn test_set_and_get_values() {
    let mut config = Config::default();
    config.set_value("terminal.profile", "single").unwrap();
    config.set_value("terminal.preferred", "kitty -d {dir}").unwrap();
    config.set_value("fallback.integrated", "false").unwrap();
    config.set_value("log.level", "debug").unwrap();

    assert_eq!(config.get_value("terminal.profile").unwrap(), "single");
    assert_eq!(config.get_value("terminal.preferred").unwrap(), "kitty -d {dir}");
    assert_eq!(config.get_value("fallback.integrated").unwrap(), "false");
    assert_eq!(config.get_value("log.level").unwrap(), "debug");

    config.set_value("terminal.preferred", "").unwrap();
    assert!(config.terminal.preferred.is_none());
}

#[test]
fn test_set_rejects_bad_values() {
    let mut config = Config::default();
    assert!(config.set_value("terminal.profile", "broadcast").is_err());
    assert!(config.set_value("fallback.integrated", "maybe").is_err());
    assert!(config.set_value("terminal.command", "  ").is_err());
    assert!(config.set_value("nope", "x").is_err());
    assert!(config.get_value("nope").is_err());
    assert_eq!(config, Config::default());
}
