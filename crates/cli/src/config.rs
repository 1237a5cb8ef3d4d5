//! Command-line configuration.
//!
//! Every flag falls back to an environment variable so the binary can be
//! configured entirely from the environment in containers.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use feed_http::HttpClientConfig;
use url::Url;

/// Output encoding for log events written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, multi-line output.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// `feedctl` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "feedctl",
    about = "Load a remote feed once and print its items as JSON",
    version
)]
pub struct CliConfig {
    /// Absolute `http`/`https` URL of the feed document.
    #[arg(long, env = "FEED_URL", value_name = "url", value_parser = parse_feed_url)]
    pub url: Url,

    /// Request timeout applied by the HTTP transport.
    #[arg(
        long = "timeout-secs",
        env = "FEED_TIMEOUT_SECS",
        value_name = "seconds",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Log output format.
    #[arg(
        long = "log-format",
        env = "FEED_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    /// OTLP collector endpoint. Span export is disabled when omitted.
    #[arg(long = "otlp-endpoint", env = "OTEL_EXPORTER_OTLP_ENDPOINT", value_name = "url")]
    pub otlp_endpoint: Option<String>,
}

impl CliConfig {
    /// Transport settings derived from the command line.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig::default().with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

fn parse_feed_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|error| format!("invalid feed URL: {error}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported feed URL scheme '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig, clap::Error> {
        CliConfig::try_parse_from(std::iter::once("feedctl").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_apply_when_only_url_is_given() {
        let config = parse(&["--url", "https://example.com/feed"]).expect("valid args");

        assert_eq!(config.url.as_str(), "https://example.com/feed");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.http_client_config().timeout, Duration::from_secs(30));
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let config = parse(&[
            "--url",
            "http://localhost:8080/feed",
            "--timeout-secs",
            "5",
            "--log-format",
            "json",
            "--otlp-endpoint",
            "http://localhost:4317",
        ])
        .expect("valid args");

        assert_eq!(config.http_client_config().timeout, Duration::from_secs(5));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
    }

    #[rstest]
    #[case::relative(&["--url", "/feed"])]
    #[case::unsupported_scheme(&["--url", "ftp://example.com/feed"])]
    #[case::zero_timeout(&["--url", "https://example.com/feed", "--timeout-secs", "0"])]
    #[case::unknown_log_format(&["--url", "https://example.com/feed", "--log-format", "xml"])]
    fn invalid_arguments_are_rejected(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
