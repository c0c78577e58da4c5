use cinegraph_cli::Config;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_gives_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let config = Config::load(path.to_str()).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.url.is_none());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let path = path.to_str().unwrap();

    let config = Config {
        url: Some("http://catalog.internal:5000".to_string()),
    };
    config.save(Some(path)).unwrap();

    let loaded = Config::load(Some(path)).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "url = [").unwrap();
    let err = Config::load(path.to_str()).unwrap_err();
    assert!(err.to_string().starts_with("cinegraph: invalid config file"));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_default_path_is_namespaced() {
    let path = Config::default_path();
    assert!(path.ends_with("cinegraph/config.toml"));
}
