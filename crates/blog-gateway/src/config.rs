//! Command-line and environment configuration.

use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Where the REST backend lives unless told otherwise.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3300";

/// Options of the `blog-gateway` binary. Every flag except the channel capacity can also
/// be set through the environment.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "blog-gateway", about = "GraphQL gateway in front of a REST blog backend")]
pub struct GatewayOptions {
    /// Base address of the REST backend.
    #[arg(long, env = "BLOG_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Port to serve GraphQL on.
    #[arg(long, env = "BLOG_GATEWAY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Per-request timeout for backend calls, in milliseconds. No timeout when unset.
    #[arg(long, env = "BLOG_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,

    /// Buffer size of each resource actor's mailbox. Must be at least 1.
    #[arg(long, default_value = "32")]
    pub channel_capacity: NonZeroUsize,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            port: 8080,
            request_timeout_ms: None,
            channel_capacity: NonZeroUsize::new(32).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl GatewayOptions {
    /// All interfaces, on the configured port.
    pub fn listen_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let options = GatewayOptions::parse_from([
            "blog-gateway",
            "--backend-url",
            "http://blog.internal:9000/api",
            "--port",
            "4000",
            "--request-timeout-ms",
            "1500",
            "--channel-capacity",
            "8",
        ]);

        assert_eq!(options.backend_url, "http://blog.internal:9000/api");
        assert_eq!(options.listen_address(), SocketAddr::from(([0, 0, 0, 0], 4000)));
        assert_eq!(options.request_timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(options.channel_capacity.get(), 8);
    }

    #[test]
    fn test_zero_channel_capacity_is_rejected() {
        let result = GatewayOptions::try_parse_from(["blog-gateway", "--channel-capacity", "0"]);
        assert!(result.is_err());

        let options = GatewayOptions::try_parse_from(["blog-gateway"]).unwrap();
        assert_eq!(options.channel_capacity.get(), 32);
    }

    #[test]
    fn test_no_timeout_by_default() {
        let options = GatewayOptions::default();
        assert_eq!(options.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(options.request_timeout(), None);
    }
}
