use serde_json::json;
use sna_logging::{
    redacted_context, LogContext, LogFormat, LogLevel, LoggingConfig, MASKED_PLACEHOLDER,
};

#[test]
fn test_logging_config_integration() {
    let yaml_config = r#"
level: debug
format: json
"#;

    let config: LoggingConfig = serde_yaml::from_str(yaml_config).unwrap();

    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Json);
    assert!(sna_logging::init_logging_from_config(&config).is_ok());
}

#[test]
fn test_minimal_logging_config() {
    // Empty document: all defaults
    let config: LoggingConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config, LoggingConfig::default());
}

#[test]
fn test_record_serializes_masked() {
    let context = redacted_context(
        LogContext::new().with_field("component", "provider"),
        [("sna_username", "admin"), ("sna_password", "hunter2")],
        &["sna_password"],
    );

    let record = context.record_with(LogLevel::Info, "Configured", [("success", true)]);
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["level"], "info");
    assert_eq!(json["message"], "Configured");
    assert_eq!(
        json["fields"],
        json!({
            "component": "provider",
            "sna_username": "admin",
            "sna_password": MASKED_PLACEHOLDER,
            "success": true,
        })
    );
    assert!(!json.to_string().contains("hunter2"));
}

#[test]
fn test_masking_unknown_key_is_harmless() {
    let context = LogContext::new()
        .with_field("sna_host", "http://x")
        .mask_field_values_with_field_keys(["not_present"]);

    assert!(context.is_masked("not_present"));
    assert_eq!(context.render()["sna_host"], "http://x");
    assert_eq!(context.len(), 1);
}
