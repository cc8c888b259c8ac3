use std::path::Path;

use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::table::RedirectTable;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid status code {code} for redirect from {from:?}")]
    InvalidCode { from: String, code: u16 },
    #[error("invalid status code {code} for the default redirect")]
    InvalidDefaultCode { code: u16 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedirectsConfig {
    pub default: DefaultRedirect,
    #[serde(default)]
    pub redirects: Vec<RedirectRule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultRedirect {
    pub to: String,
    #[serde(default = "default_code")]
    pub code: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedirectRule {
    pub from: String,
    pub to: String,
    #[serde(default = "default_code")]
    pub code: u16,
}

fn default_code() -> u16 {
    StatusCode::FOUND.as_u16()
}

impl RedirectsConfig {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the table the configuration describes. Destinations are taken
    /// as-is; only status codes outside the representable HTTP range are
    /// rejected.
    pub fn into_table(self) -> Result<RedirectTable, ConfigError> {
        let default_code = StatusCode::from_u16(self.default.code)
            .map_err(|_| ConfigError::InvalidDefaultCode {
                code: self.default.code,
            })?;

        let mut table = RedirectTable::new(self.default.to, default_code);

        for rule in self.redirects {
            let code = StatusCode::from_u16(rule.code).map_err(|_| ConfigError::InvalidCode {
                from: rule.from.clone(),
                code: rule.code,
            })?;

            table = table.add(&rule.from, rule.to, code);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [default]
        to = "https://example.com/default"

        [[redirects]]
        from = "/redirectToA"
        to = "/targetA/"

        [[redirects]]
        from = "/redirectToB"
        to = "/targetB/"
        code = 301
    "#;

    #[test]
    fn parses_toml_and_defaults_codes_to_302() {
        let config = RedirectsConfig::from_toml(CONFIG).unwrap();

        assert_eq!(config.default.to, "https://example.com/default");
        assert_eq!(config.default.code, 302);
        assert_eq!(config.redirects.len(), 2);
        assert_eq!(config.redirects[0].code, 302);
        assert_eq!(config.redirects[1].code, 301);
    }

    #[test]
    fn missing_default_is_a_parse_error() {
        let result = RedirectsConfig::from_toml("[[redirects]]\nfrom = \"/a\"\nto = \"/b\"\n");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn builds_a_table_with_every_rule() {
        let table = RedirectsConfig::from_toml(CONFIG).unwrap().into_table().unwrap();

        assert_eq!(table.resolve("/redirecttoa").to, "/targetA/");
        assert_eq!(table.resolve("/redirecttob/").code, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(table.resolve("/other").to, "https://example.com/default");
    }

    #[test]
    fn rejects_codes_outside_the_http_range() {
        let config = RedirectsConfig::from_toml(
            r#"
            [default]
            to = "/"

            [[redirects]]
            from = "/a"
            to = "/b"
            code = 99
            "#,
        )
        .unwrap();

        let result = config.into_table();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidCode { code: 99, .. })
        ));
    }

    #[test]
    fn rejects_an_out_of_range_default_code() {
        let config = RedirectsConfig::from_toml("[default]\nto = \"/\"\ncode = 1000\n").unwrap();

        assert!(matches!(
            config.into_table(),
            Err(ConfigError::InvalidDefaultCode { code: 1000 })
        ));
    }

    #[tokio::test]
    async fn loads_from_a_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let config = RedirectsConfig::from_file(file.path()).await.unwrap();

        assert_eq!(config.redirects.len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let result = RedirectsConfig::from_file("/nonexistent/rebound.toml").await;

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
