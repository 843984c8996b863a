use std::{env, time::Duration};

use url::Url;

use crate::{
    error::{Error, Result},
    fetch::{DEFAULT_ENDPOINT, DEFAULT_MENU_TYPE},
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub endpoint: Url,
    pub menu_type: u32,
    pub timeout: Duration,
    pub output: OutputFormat,
}

impl Config {
    /// Reads `HUDS_ENDPOINT`, `HUDS_MENU_TYPE`, `HUDS_TIMEOUT_SECS` and `HUDS_OUTPUT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let endpoint = lookup("HUDS_ENDPOINT");
        let endpoint = Url::parse(endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
            .map_err(|e| Error::Config(format!("HUDS_ENDPOINT is not a valid url: {e}")))?;

        let menu_type = match lookup("HUDS_MENU_TYPE") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .map_err(|_| Error::Config(format!("HUDS_MENU_TYPE should be an integer, got {v:?}")))?,
            None => DEFAULT_MENU_TYPE,
        };

        let timeout = match lookup("HUDS_TIMEOUT_SECS") {
            Some(v) => v.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                Error::Config(format!("HUDS_TIMEOUT_SECS should be a whole number of seconds, got {v:?}"))
            })?,
            None => Duration::from_secs(30),
        };

        let output = match lookup("HUDS_OUTPUT").as_deref().map(str::trim) {
            None | Some("" | "text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(Error::Config(format!(
                    "HUDS_OUTPUT should be `text` or `json`, got {other:?}"
                )))
            }
        };

        Ok(Self {
            endpoint,
            menu_type,
            timeout,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.menu_type, 30);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("HUDS_ENDPOINT", "http://127.0.0.1:3000/menu_items.asp"),
            ("HUDS_MENU_TYPE", " 12 "),
            ("HUDS_TIMEOUT_SECS", "5"),
            ("HUDS_OUTPUT", "json"),
        ])
        .unwrap();
        assert_eq!(config.endpoint.port(), Some(3000));
        assert_eq!(config.menu_type, 12);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(config(&[("HUDS_ENDPOINT", "not a url")]), Err(Error::Config(_))));
        assert!(matches!(config(&[("HUDS_MENU_TYPE", "vegan")]), Err(Error::Config(_))));
        assert!(matches!(config(&[("HUDS_TIMEOUT_SECS", "-1")]), Err(Error::Config(_))));
        assert!(matches!(config(&[("HUDS_OUTPUT", "yaml")]), Err(Error::Config(_))));
    }
}
