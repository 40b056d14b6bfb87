use crate::api::BASE_URL as TWITTER_BASE_URL;
use crate::error::{AppError, Result};
use crate::server;
use clap::Parser;
use std::env::{self, VarError};
use std::time::Duration;
use tracing::{info, warn};

/// Trending topics service: live provider trends with a deterministic mock mode
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Upper bound, in seconds, on a single live trends fetch
    #[arg(long, env = "TRENDS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Emit logs as JSON lines instead of human-readable text
    #[arg(long)]
    pub json_logs: bool,
}

/// Trend provider settings. Each credential may be absent.
#[derive(Clone, Default)]
pub struct TwitterSettings {
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
    pub api_base_url: String,
}

impl std::fmt::Debug for TwitterSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterSettings")
            .field("consumer_key", &self.consumer_key.is_some())
            .field("consumer_secret", &self.consumer_secret.is_some())
            .field("access_token", &self.access_token.is_some())
            .field("access_token_secret", &self.access_token_secret.is_some())
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// Hosting-provider settings used by the `/` health check.
#[derive(Clone, Default)]
pub struct GitHubSettings {
    pub login: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

/// Read-only configuration built once at startup and shared with every request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub twitter: TwitterSettings,
    pub github: GitHubSettings,
    pub fetch_timeout: Duration,
}

impl AppConfig {
    /// Builds the configuration from the process environment and parsed arguments.
    pub fn from_env(cli: &Cli) -> Result<Self> {
        if cli.timeout_secs == 0 {
            return Err(AppError::Config(
                "TRENDS_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        let twitter = TwitterSettings {
            consumer_key: non_blank_env("TWITTER_CONSUMER_KEY")?,
            consumer_secret: non_blank_env("TWITTER_CONSUMER_SECRET")?,
            access_token: non_blank_env("TWITTER_ACCESS_TOKEN")?,
            access_token_secret: non_blank_env("TWITTER_ACCESS_TOKEN_SECRET")?,
            api_base_url: non_blank_env("TWITTER_API_BASE_URL")?
                .unwrap_or_else(|| TWITTER_BASE_URL.to_string()),
        };

        let github = GitHubSettings {
            login: non_blank_env("GITHUB_LOGIN")?,
            password: non_blank_env("GITHUB_PASSWORD")?,
            token: non_blank_env("GITHUB_TOKEN")?,
        };

        Ok(Self {
            twitter,
            github,
            fetch_timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}

impl std::fmt::Debug for GitHubSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubSettings")
            .field("login", &self.login)
            .field("password", &self.password.is_some())
            .field("token", &self.token.is_some())
            .finish()
    }
}

/// Reads an environment variable, treating unset and blank values alike.
fn non_blank_env(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(Some(value)),
        Ok(_) | Err(VarError::NotPresent) => Ok(None),
        Err(e) => {
            warn!("Environment variable {} is not valid unicode", name);
            Err(AppError::Env(e))
        },
    }
}

/// Service application
pub struct App {
    cli: Cli,
    config: AppConfig,
}

impl App {
    /// Create a new application from parsed arguments
    pub fn new(cli: Cli) -> Result<Self> {
        let config = AppConfig::from_env(&cli)?;
        info!(
            "Configuration loaded (trend fetch timeout: {:?})",
            config.fetch_timeout
        );

        Ok(Self { cli, config })
    }

    /// Run the HTTP server until shutdown
    pub async fn run(self) -> Result<()> {
        server::serve(self.config, &self.cli.host, self.cli.port).await
    }
}
