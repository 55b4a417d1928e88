use std::net::SocketAddr;

use serde::Deserialize;

/// Deployment environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development: pretty logs, permissive CORS
    #[default]
    Development,
    /// Production: JSON logs, HSTS, explicit CORS origins
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Server configuration, read from environment variables.
///
/// | Variable | Default |
/// |---|---|
/// | `ENV` | `development` |
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `3000` |
/// | `ALLOWED_ORIGINS` | empty (comma separated) |
/// | `MOCK_SEED` | unset |
/// | `ALLOW_DEMO_PASSWORDS` | `false` |
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Seed for the mock generators; unset means fresh randomness per request
    pub mock_seed: Option<u64>,
    /// Accept the demo fallback passwords for every directory user
    #[serde(default)]
    pub allow_demo_passwords: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }

    /// Configured origins with blanks removed.
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            mock_seed: None,
            allow_demo_passwords: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config: ApiConfig = envy::from_iter(vars(&[])).unwrap();
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.port, 3000);
        assert_eq!(config.mock_seed, None);
        assert!(!config.allow_demo_passwords);
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_reads_variables() {
        let config: ApiConfig = envy::from_iter(vars(&[
            ("ENV", "production"),
            ("PORT", "8080"),
            ("MOCK_SEED", "42"),
            ("ALLOW_DEMO_PASSWORDS", "true"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example"),
        ]))
        .unwrap();

        assert!(config.env.is_production());
        assert_eq!(config.port, 8080);
        assert_eq!(config.mock_seed, Some(42));
        assert!(config.allow_demo_passwords);
        assert_eq!(
            config.origins(),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn test_rejects_bad_port() {
        let result: Result<ApiConfig, _> = envy::from_iter(vars(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
