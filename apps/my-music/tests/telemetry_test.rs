//! Tracing subscriber installation

use soundshelf_my_music::telemetry::init_tracing;
use soundshelf_shared_config::{BackendConfig, CommonConfig, Environment};

#[test]
fn test_init_tracing_installs_once() {
    let config = CommonConfig {
        backend: BackendConfig::with_url("http://localhost:8000").unwrap(),
        environment: Environment::Development,
        log_level: "soundshelf_my_music=debug".to_string(),
    };

    assert!(init_tracing(&config).is_ok());
    assert!(init_tracing(&config).is_err());
}
