use std::time::Duration;

use clap::Parser;

/// Startup configuration. Parsed once in `main` and handed to the server.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "valorant-exporter",
    version,
    about = "Prometheus probe exporter for Valorant ranked statistics"
)]
pub struct Config {
    /// The address to listen on for HTTP requests.
    #[arg(long, env = "VALORANT_EXPORTER_LISTEN", default_value = "localhost")]
    pub listen: String,

    /// The port to listen on for HTTP requests.
    #[arg(long, env = "VALORANT_EXPORTER_PORT", default_value_t = 1091)]
    pub port: u16,

    /// Base URL of the MMR v2 API, without region.
    #[arg(
        long,
        env = "VALORANT_EXPORTER_API_BASE_URL",
        default_value = "https://api.henrikdev.xyz/valorant/v2/mmr"
    )]
    pub api_base_url: String,

    /// Region segment inserted between the base URL and the target.
    #[arg(long, env = "VALORANT_EXPORTER_REGION", default_value = "eu")]
    pub region: String,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "VALORANT_EXPORTER_UPSTREAM_TIMEOUT", default_value_t = 10)]
    pub upstream_timeout: u64,
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_exporter() {
        let config = Config::parse_from(["valorant-exporter"]);
        assert_eq!(config.listen_addr(), "localhost:1091");
        assert_eq!(config.region, "eu");
        assert_eq!(config.api_base_url, "https://api.henrikdev.xyz/valorant/v2/mmr");
        assert_eq!(config.upstream_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::parse_from([
            "valorant-exporter",
            "--listen",
            "0.0.0.0",
            "--port",
            "9100",
            "--region",
            "na",
            "--upstream-timeout",
            "3",
        ]);
        assert_eq!(config.listen_addr(), "0.0.0.0:9100");
        assert_eq!(config.region, "na");
        assert_eq!(config.upstream_timeout(), Duration::from_secs(3));
    }
}
