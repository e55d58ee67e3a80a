use super::*;
use tempfile::tempdir;

#[test]
fn load_settings_from_missing_file_is_none() {
    let dir = tempdir().unwrap();
    assert!(load_settings_from(&dir.path().join("settings.json")).is_none());
}

#[test]
fn load_settings_from_reads_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "tab_stop": 4, "show_welcome": false }"#).unwrap();

    let config = load_settings_from(&path).unwrap();
    assert_eq!(config.tab_stop, 4);
    assert!(!config.show_welcome);
    assert_eq!(config.quit_key, 'q');
}

#[test]
fn load_settings_from_rejects_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ tab_stop: ").unwrap();

    assert!(load_settings_from(&path).is_none());
}

#[test]
fn settings_and_logs_live_under_app_dirs() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".kilo/settings.json"));
    }
    if let Some(dir) = get_log_dir() {
        assert!(dir.ends_with("kilo/logs"));
    }
}
