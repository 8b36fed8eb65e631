use thiserror::Error;

pub const DEFAULT_TUNER_API_URL: &str = "https://api.usetuner.ai/api/v1/public/call";
pub const DEFAULT_WINDOW_HOURS: u64 = 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {name}")]
    MissingVar { name: String },

    #[error("environment variable {name} has invalid value {value:?}: expected {expected}")]
    InvalidVar {
        name: String,
        value: String,
        expected: &'static str,
    },

    #[error("window start {start} is after window end {end}")]
    InvalidWindow { start: i64, end: i64 },
}

/// Resolved runtime configuration, built once at startup and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    pub elevenlabs_api_key: String,
    pub elevenlabs_agent_id: String,
    pub tuner_api_key: String,
    pub tuner_api_url: String,
    pub tuner_workspace_id: String,
    pub tuner_agent_remote_identifier: String,
    pub window_hours: u64,
    pub window_start: Option<i64>,
    pub window_end: Option<i64>,
}

impl Config {
    /// Build from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Tests use this with a map
    /// instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            elevenlabs_api_key: required(&lookup, "ELEVENLABS_API_KEY")?,
            elevenlabs_agent_id: required(&lookup, "ELEVENLABS_AGENT_ID")?,
            tuner_api_key: required(&lookup, "TUNER_API_KEY")?,
            tuner_api_url: lookup("TUNER_API_URL")
                .unwrap_or_else(|| DEFAULT_TUNER_API_URL.to_string()),
            tuner_workspace_id: required(&lookup, "TUNER_WORKSPACE_ID")?,
            tuner_agent_remote_identifier: required(&lookup, "TUNER_AGENT_REMOTE_IDENTIFIER")?,
            window_hours: parsed(&lookup, "TIME_WINDOW_HOURS")?.unwrap_or(DEFAULT_WINDOW_HOURS),
            window_start: parsed(&lookup, "START_TIME_UNIX")?,
            window_end: parsed(&lookup, "END_TIME_UNIX")?,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar { name: name.into() }),
    }
}

fn parsed<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidVar {
            name: name.into(),
            value: v,
            expected: "an integer",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            ("ELEVENLABS_API_KEY", "xi-key"),
            ("ELEVENLABS_AGENT_ID", "agent_1"),
            ("TUNER_API_KEY", "tuner-key"),
            ("TUNER_WORKSPACE_ID", "ws_1"),
            ("TUNER_AGENT_REMOTE_IDENTIFIER", "remote_1"),
        ])
    }

    #[test]
    fn loads_with_defaults() {
        let vars = full_env();
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.tuner_api_url, DEFAULT_TUNER_API_URL);
        assert_eq!(config.window_hours, 24);
        assert!(config.window_start.is_none());
        assert!(config.window_end.is_none());
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let mut vars = full_env();
        vars.remove("ELEVENLABS_API_KEY");
        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar { name } if name == "ELEVENLABS_API_KEY"));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut vars = full_env();
        vars.insert("TUNER_API_KEY".into(), String::new());
        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar { name } if name == "TUNER_API_KEY"));
    }

    #[test]
    fn explicit_window_and_hours() {
        let mut vars = full_env();
        vars.insert("TIME_WINDOW_HOURS".into(), "6".into());
        vars.insert("START_TIME_UNIX".into(), "1700000000".into());
        vars.insert("END_TIME_UNIX".into(), "1700003600".into());
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.window_hours, 6);
        assert_eq!(config.window_start, Some(1700000000));
        assert_eq!(config.window_end, Some(1700003600));
    }

    #[test]
    fn non_numeric_hours_rejected() {
        let mut vars = full_env();
        vars.insert("TIME_WINDOW_HOURS".into(), "soon".into());
        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name, .. } if name == "TIME_WINDOW_HOURS"));
    }

    #[test]
    fn custom_tuner_url_kept() {
        let mut vars = full_env();
        vars.insert("TUNER_API_URL".into(), "https://staging.usetuner.ai/call".into());
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.tuner_api_url, "https://staging.usetuner.ai/call");
    }
}
