use super::{AppBox, Config, Eviction};

/// Creates a new test configuration.
pub fn new_test_config() -> Config {
    Config {
        app: AppBox {
            env: super::TEST.to_string(),
            logs: Some(super::Logs {
                level: Some("debug".to_string()),
            }),
            eviction: Some(Eviction::default()),
            metrics: Some(super::Metrics {
                enabled: false,
                listen: None,
            }),
            shutdown: Some(super::Shutdown {
                timeout: Some(std::time::Duration::from_secs(1)),
            }),
        },
    }
}
