use sentimeter::infrastructure::observability::TracingConfig;

#[test]
fn given_level_when_creating_config_then_default_filter_includes_crate_directives() {
    let config = TracingConfig::new("test", true, "warn");

    assert_eq!(config.environment, "test");
    assert!(config.json_format);
    assert!(config.default_filter.starts_with("warn,"));
    assert!(config.default_filter.contains("sentimeter=debug"));
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}
