use std::fs;
use std::path::PathBuf;

use chatter_compose::{ComposeConfig, ConfigError};
use tempfile::TempDir;

#[test]
fn test_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chatter.toml");
    fs::write(
        &path,
        r#"
templates_dir = "/srv/chatter/templates"
template_extension = ".j2"
default_priority = 3
list_separator = " | "
"#,
    )
    .unwrap();

    let config = ComposeConfig::from_file(&path).unwrap();
    assert_eq!(config.templates_dir, PathBuf::from("/srv/chatter/templates"));
    assert_eq!(config.template_extension, ".j2");
    assert_eq!(config.default_priority, 3);
    assert_eq!(config.list_separator, " | ");
    assert_eq!(config.max_line_length, 350);
}

#[test]
fn test_config_from_file_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chatter.toml");
    fs::write(&path, "max_line_length = [1, 2]").unwrap();

    let err = ComposeConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
