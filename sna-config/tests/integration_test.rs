//! Integration tests for sna-config

use sna_config::*;
use temp_env::with_vars;

fn full_env() -> MapEnv {
    MapEnv::new()
        .with_var("SNA_HOST", "http://env-host")
        .with_var("SNA_USERNAME", "env-user")
        .with_var("SNA_PASSWORD", "env-pass")
}

fn error_paths(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics
        .errors()
        .filter_map(|d| d.path().map(ToString::to_string))
        .collect()
}

#[test]
fn test_scenario_explicit_host_with_env_credentials() {
    let env = MapEnv::new()
        .with_var("SNA_USERNAME", "u")
        .with_var("SNA_PASSWORD", "p");
    let input = ProviderConfigInput::new().with_host("http://x");

    let resolution = ConfigResolver::new(env).resolve(&input).unwrap();

    assert_eq!(resolution.config.host(), "http://x");
    assert_eq!(resolution.config.username(), "u");
    assert_eq!(resolution.config.password(), "p");
    assert!(!resolution.diagnostics.has_error());
}

#[test]
fn test_scenario_everything_missing() {
    let diagnostics = ConfigResolver::new(MapEnv::new())
        .resolve(&ProviderConfigInput::new())
        .unwrap_err();

    assert_eq!(diagnostics.len(), 3);
    assert_eq!(error_paths(&diagnostics), vec!["host", "username", "password"]);
    assert!(diagnostics
        .iter()
        .all(|d| d.summary().starts_with("Missing Secure Network Analytics API")));
}

#[test]
fn test_scenario_unresolved_host_stops_before_merge() {
    let input = ProviderConfigInput::new()
        .with_host(ConfigValue::Unresolved)
        .with_username("u")
        .with_password("p");

    let diagnostics = ConfigResolver::new(MapEnv::new()).resolve(&input).unwrap_err();

    // Only the unknown-value error: no missing-host error from a later phase.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(error_paths(&diagnostics), vec!["host"]);
    assert_eq!(
        diagnostics.as_slice()[0].summary(),
        "Unknown Secure Network Analytics API Host"
    );
}

#[test]
fn test_one_unknown_error_per_unresolved_attribute() {
    for unresolved in [
        vec![Attribute::Host],
        vec![Attribute::Username, Attribute::Password],
        Attribute::ALL.to_vec(),
    ] {
        let input = unresolved
            .iter()
            .fold(ProviderConfigInput::new(), |input, attribute| {
                input.with(*attribute, ConfigValue::Unresolved)
            });

        let diagnostics = ConfigResolver::new(full_env()).resolve(&input).unwrap_err();

        let expected: Vec<String> = unresolved.iter().map(|a| a.name().to_string()).collect();
        assert_eq!(error_paths(&diagnostics), expected);
        assert!(diagnostics
            .iter()
            .all(|d| d.summary().starts_with("Unknown")));
    }
}

#[test]
fn test_empty_environment_value_counts_as_missing() {
    let env = full_env().with_var("SNA_USERNAME", "");

    let diagnostics = ConfigResolver::new(env)
        .resolve(&ProviderConfigInput::new())
        .unwrap_err();

    assert_eq!(error_paths(&diagnostics), vec!["username"]);
}

#[test]
fn test_explicit_value_beats_environment() {
    let input = ProviderConfigInput::new().with_host("a");

    let resolution = ConfigResolver::new(full_env().with_var("SNA_HOST", "b"))
        .resolve(&input)
        .unwrap();

    assert_eq!(resolution.config.host(), "a");
    assert_eq!(resolution.config.username(), "env-user");
}

#[test]
fn test_explicit_empty_value_overrides_environment() {
    let input = ProviderConfigInput::new().with_password("");

    let diagnostics = ConfigResolver::new(full_env()).resolve(&input).unwrap_err();

    assert_eq!(error_paths(&diagnostics), vec!["password"]);
}

#[test]
fn test_resolution_is_repeatable() {
    let resolver = ConfigResolver::new(full_env());
    let good = ProviderConfigInput::new().with_username("explicit");
    assert_eq!(resolver.resolve(&good), resolver.resolve(&good));

    let bad = ProviderConfigInput::new()
        .with_host(ConfigValue::Unresolved)
        .with_password(ConfigValue::Unresolved);
    assert_eq!(resolver.resolve(&bad), resolver.resolve(&bad));
}

#[test]
fn test_process_environment_is_read_on_each_call() {
    let resolver = ConfigResolver::from_process_env();
    let input = ProviderConfigInput::new();

    with_vars(
        [
            ("SNA_HOST", Some("http://first")),
            ("SNA_USERNAME", Some("u")),
            ("SNA_PASSWORD", Some("p")),
        ],
        || {
            let resolution = resolver.resolve(&input).unwrap();
            assert_eq!(resolution.config.host(), "http://first");
        },
    );

    with_vars(
        [
            ("SNA_HOST", None::<&str>),
            ("SNA_USERNAME", None),
            ("SNA_PASSWORD", None),
        ],
        || {
            let diagnostics = resolver.resolve(&input).unwrap_err();
            assert_eq!(diagnostics.len(), 3);
        },
    );
}

#[test]
fn test_failed_resolution_converts_to_config_error() {
    fn resolve_or_fail(input: &ProviderConfigInput) -> ConfigResult<ResolvedConfig> {
        let resolution = ConfigResolver::new(MapEnv::new()).resolve(input)?;
        Ok(resolution.config)
    }

    let err = resolve_or_fail(&ProviderConfigInput::new().with_host("http://x")).unwrap_err();
    let message = err.to_string();

    assert!(message.starts_with("Invalid configuration:"));
    assert!(message.contains("Missing Secure Network Analytics API Username"));
    assert!(message.contains("Missing Secure Network Analytics API Password"));
}

#[test]
fn test_loader_from_file_then_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("provider.yaml");
    std::fs::write(&path, "host: \"http://from-file\"\nusername: admin\n").unwrap();

    let input = ConfigLoader::new().load(Some(&path)).unwrap();
    let resolution = ConfigResolver::new(MapEnv::new().with_var("SNA_PASSWORD", "p"))
        .resolve(&input)
        .unwrap();

    assert_eq!(resolution.config.host(), "http://from-file");
    assert_eq!(resolution.config.username(), "admin");
    assert_eq!(resolution.config.password(), "p");
}

#[test]
fn test_loader_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("provider.json");
    std::fs::write(&path, r#"{"host": "http://j", "username": null}"#).unwrap();

    let input = ConfigLoader::new().from_file(&path).unwrap();
    assert_eq!(input.get(Attribute::Host).as_present(), Some("http://j"));
    assert!(input.get(Attribute::Username).is_absent());
}

#[test]
fn test_loader_missing_file() {
    let err = ConfigLoader::new()
        .from_file("/nonexistent/provider.yaml")
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileReadError(_)));
}
