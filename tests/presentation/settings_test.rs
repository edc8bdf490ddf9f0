use std::sync::Mutex;

use sentimeter::domain::Backend;
use sentimeter::infrastructure::sentiment::DEFAULT_SENTIMENT_MODEL;
use sentimeter::presentation::{Environment, Settings};

#[test]
fn given_no_sources_when_building_settings_then_uses_defaults() {
    let settings: Settings = Settings::builder(Environment::Test)
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.backend(), Backend::Vader);
    assert_eq!(settings.sentiment.model, DEFAULT_SENTIMENT_MODEL);
    assert!(!settings.sentiment.preload);
    assert!(!settings.logging.json);
}

#[test]
fn given_override_when_building_settings_then_backend_is_parsed() {
    let settings: Settings = Settings::builder(Environment::Test)
        .unwrap()
        .set_override("sentiment.backend", " Transformers ")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    assert_eq!(settings.backend(), Backend::Transformers);
}

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!("production".parse::<Environment>(), Ok(Environment::Prod));
    assert_eq!("Local".parse::<Environment>(), Ok(Environment::Local));
    assert_eq!("test".parse::<Environment>(), Ok(Environment::Test));
    assert!("staging".parse::<Environment>().is_err());
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

const OVERRIDE_VARS: [(&str, &str); 5] = [
    ("SENTIMENT_BACKEND", "Transformers"),
    ("HF_SENTIMENT_MODEL", "/models/sst2"),
    ("SERVER_PORT", "8081"),
    ("LOG_FORMAT", "JSON"),
    ("APP__LOGGING__LEVEL", "warn"),
];

/// Restores the touched variables when dropped.
struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        let saved = vars
            .iter()
            .map(|(key, _)| (*key, std::env::var(key).ok()))
            .collect();
        for (key, value) in vars {
            // SAFETY: callers hold ENV_LOCK, and no other test reads these variables.
            unsafe { std::env::set_var(key, value) };
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            // SAFETY: see EnvGuard::set.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

#[test]
fn given_environment_overrides_when_loading_settings_then_they_win_over_defaults() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _env = EnvGuard::set(&OVERRIDE_VARS);

    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.backend(), Backend::Transformers);
    assert_eq!(settings.sentiment.model, "/models/sst2");
    assert_eq!(settings.server.port, 8081);
    assert!(settings.logging.json);
    assert_eq!(settings.logging.level, "warn");
}
