use clap::Parser;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

#[derive(Parser, Debug)]
#[command(author, version, about = "Desktop chat client for a remote HTTP responder", long_about = None)]
pub struct Cli {
    /// Base URL of the remote responder; requests go to `<endpoint>/chat/`
    #[arg(long, env = "CHATBOX_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid endpoint '{raw}': {source}")]
    InvalidEndpoint {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("endpoint '{0}' must use http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(cli.endpoint.trim()).map_err(|source| {
            ConfigError::InvalidEndpoint {
                raw: cli.endpoint.clone(),
                source,
            }
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(cli.endpoint));
        }

        Ok(Self { endpoint })
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Config, ConfigError};
    use clap::Parser;

    #[test]
    fn endpoint_flag_overrides_default() {
        let cli = Cli::try_parse_from(["chatbox", "--endpoint", "http://10.0.0.5:9000"])
            .expect("flag should parse");
        let config = Config::from_cli(cli).expect("endpoint should be accepted");
        assert_eq!(config.endpoint.as_str(), "http://10.0.0.5:9000/");
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let cli = Cli {
            endpoint: "not a url".to_string(),
        };
        let err = Config::from_cli(cli).expect_err("garbage endpoint should fail");
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let cli = Cli {
            endpoint: "ftp://127.0.0.1:8000".to_string(),
        };
        let err = Config::from_cli(cli).expect_err("ftp endpoint should fail");
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));
    }
}
