use crate::error::PipelineError;
use std::collections::HashMap;
use std::fmt;

/// Destination connection parameters for the SQL script runner, sourced from
/// the environment. An explicit struct rather than ambient `env::var` reads
/// at the call sites.
#[derive(Clone)]
pub struct PgConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl PgConfig {
    pub fn from_env() -> Result<Self, PipelineError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Pure parser over a variable map; `from_env` delegates here.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, PipelineError> {
        let get = |key: &str| {
            vars.get(key)
                .cloned()
                .ok_or_else(|| PipelineError::Config(format!("Missing environment variable: {key}")))
        };

        let port_raw = get("PG_PORT")?;
        let port = port_raw.parse::<u16>().map_err(|err| {
            PipelineError::Config(format!("Invalid PG_PORT '{port_raw}': {err}"))
        })?;

        Ok(PgConfig {
            host: get("PG_HOST")?,
            port,
            dbname: get("PG_DB")?,
            user: get("PG_USER")?,
            password: get("PG_PASSWORD")?,
        })
    }

    pub fn to_pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password);
        config
    }
}

impl fmt::Debug for PgConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_vars() -> HashMap<String, String> {
        [
            ("PG_HOST", "db.internal"),
            ("PG_PORT", "5432"),
            ("PG_DB", "trips"),
            ("PG_USER", "loader"),
            ("PG_PASSWORD", "s3cret"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_from_vars() {
        let config = PgConfig::from_vars(&full_vars()).unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 5432);
        assert_eq!(config.dbname, "trips");
        assert_eq!(config.user, "loader");
        assert_eq!(config.password, "s3cret");
    }

    #[test]
    fn test_missing_variable() {
        let mut vars = full_vars();
        vars.remove("PG_DB");
        let err = PgConfig::from_vars(&vars).unwrap_err();
        assert!(err.to_string().contains("PG_DB"));
    }

    #[test]
    fn test_malformed_port() {
        let mut vars = full_vars();
        vars.insert("PG_PORT".into(), "not-a-port".into());
        let err = PgConfig::from_vars(&vars).unwrap_err();
        assert!(err.to_string().contains("PG_PORT"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = PgConfig::from_vars(&full_vars()).unwrap();
        let rendered = format!("{config:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("s3cret"));
    }
}
