use stashkit_observability::{LogFormat, ObservabilityConfig, init, init_with};

#[test]
fn repeated_initialization_is_a_no_op() {
    let config = ObservabilityConfig::from_parts(Some("debug".into()), Some("pretty"));
    assert_eq!(config.format, LogFormat::Pretty);

    init_with(&config);
    init_with(&config);
    init();

    tracing::debug!(format = "pretty", "subscriber installed once");
    assert!(tracing::enabled!(tracing::Level::DEBUG));
    assert!(!tracing::enabled!(tracing::Level::TRACE));
}
