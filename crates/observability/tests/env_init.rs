use stashkit_observability::{LOG_FORMAT_ENV, ObservabilityConfig, init};

#[test]
fn from_env_matches_the_raw_environment() {
    let expected = ObservabilityConfig::from_parts(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_FORMAT_ENV).ok().as_deref(),
    );

    assert_eq!(ObservabilityConfig::from_env(), expected);
}

#[test]
fn init_from_environment_installs_a_subscriber() {
    init();
    init();

    tracing::info!("json subscriber installed");
    let installed = tracing::dispatcher::get_default(|dispatch| {
        !dispatch.is::<tracing::subscriber::NoSubscriber>()
    });
    assert!(installed);
}
