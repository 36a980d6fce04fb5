use flow_assist::config::{AssistantConfig, ConfigError, DEFAULT_CHAT_WIDTH};
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = AssistantConfig::default();
    assert!(config.assistant_enabled);
    assert_eq!(config.chat_width, DEFAULT_CHAT_WIDTH);
    assert!(!config.chat_open_on_startup);
    assert_eq!(config.experiment_name, "021_ai_debug_helper");
    assert_eq!(config.error_helper_placeholder, "Analyzing the error...");
    assert!(config.user_first_name.is_none());
}

#[test]
fn test_config_builders() {
    let config = AssistantConfig::new()
        .with_chat_width(480.0)
        .with_assistant_enabled(false);
    assert_eq!(config.chat_width, 480.0);
    assert!(!config.assistant_enabled);
}

#[test]
fn test_config_save_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.yaml");

    let config = AssistantConfig {
        chat_open_on_startup: true,
        user_first_name: Some("Ada".to_string()),
        ..AssistantConfig::new().with_chat_width(512.0)
    };
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("yaml.tmp").exists());
    assert_eq!(AssistantConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_config_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");

    let config = AssistantConfig::load_from(&path).unwrap();
    assert_eq!(config, AssistantConfig::default());
    assert!(!path.exists());
}

#[test]
fn test_config_partial_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "chat_width: 600\nassistant_enabled: false\n").unwrap();

    let config = AssistantConfig::load_from(&path).unwrap();
    assert_eq!(config.chat_width, 600.0);
    assert!(!config.assistant_enabled);
    assert_eq!(config.experiment_name, "021_ai_debug_helper");
}

#[test]
fn test_config_invalid_yaml_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "chat_width: [not, a, number]\n").unwrap();

    let err = AssistantConfig::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_config_blank_experiment_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "experiment_name: \"\"\n").unwrap();

    let err = AssistantConfig::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(msg)) if msg.contains("experiment_name")
    ));
}

#[test]
fn test_config_save_rejects_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");

    let config = AssistantConfig::new().with_chat_width(f32::INFINITY);
    assert!(config.save_to(&path).is_err());
    assert!(!path.exists());
}
