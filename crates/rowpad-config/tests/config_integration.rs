use rowpad_config::EditorConfig;

#[test]
fn test_load_creates_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rowpad.json");
    assert!(!path.exists());

    let config = EditorConfig::load_or_create(&path);
    assert!(path.exists());
    assert_eq!(config, EditorConfig::default());

    // File should contain valid JSON
    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["tab_width"], 4);
}

#[test]
fn test_load_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("rowpad").join("rowpad.json");

    EditorConfig::load_or_create(&path);
    assert!(path.exists());
}

#[test]
fn test_load_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rowpad.json");
    let json = r#"{
        "tab_width": 2,
        "max_undo_depth": 100,
        "trailing_newline": false,
        "screen_width": 120,
        "screen_height": 40
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = EditorConfig::load_or_create(&path);
    assert_eq!(config.tab_width, 2);
    assert_eq!(config.max_undo_depth, 100);
    assert!(!config.trailing_newline);
    assert_eq!(config.screen_width, 120);
    assert_eq!(config.screen_height, 40);
}

#[test]
fn test_broken_json_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rowpad.json");
    std::fs::write(&path, "{ this is not valid json }}}").unwrap();

    let config = EditorConfig::load_or_create(&path);
    assert_eq!(config, EditorConfig::default());

    // The broken file is not overwritten
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{ this is not valid json }}}");
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rowpad.json");
    std::fs::write(&path, r#"{"screen_height": 10}"#).unwrap();

    let config = EditorConfig::load_or_create(&path);
    assert_eq!(config.screen_height, 10);
    assert_eq!(config.screen_width, 80);
    assert_eq!(config.tab_width, 4);
}

#[test]
fn test_out_of_range_values_are_sanitized_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rowpad.json");
    std::fs::write(&path, r#"{"tab_width": 64, "max_undo_depth": 0}"#).unwrap();

    let config = EditorConfig::load_or_create(&path);
    assert_eq!(config.tab_width, 16);
    assert_eq!(config.max_undo_depth, 1);
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rowpad.json");

    let config = EditorConfig {
        tab_width: 3,
        screen_width: 100,
        ..EditorConfig::default()
    };
    config.save(&path).unwrap();

    let loaded = EditorConfig::load_or_create(&path);
    assert_eq!(loaded, config);
}
