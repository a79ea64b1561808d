// tests/config_test.rs
use std::io::Write;
use tempfile::NamedTempFile;
use versioner::config::{load_config, Config};
use versioner::{bump_with_config, VersionSegment, VersionerError};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[bump]
segment = "major"
preserve_suffix = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.bump.segment, VersionSegment::Major);
    assert!(config.bump.preserve_suffix);
    assert_eq!(bump_with_config("v1.4.2-rc.2+abc", &config), "v2.0.0-rc.2");
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[bump]\nsegment = \"minor\"\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.bump.segment, VersionSegment::Minor);
    assert!(!config.bump.preserve_suffix);
    assert_eq!(bump_with_config("1.4.2-rc.2", &config), "1.5.0");
}

#[test]
fn test_load_invalid_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[bump\nsegment = ").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(matches!(result, Err(VersionerError::Toml(_))));
}

#[test]
fn test_config_serializes_back_to_toml() {
    let config = Config::from_toml_str("[bump]\nsegment = \"major\"\n").unwrap();
    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains("segment = \"major\""));
    assert_eq!(Config::from_toml_str(&rendered).unwrap(), config);
}
