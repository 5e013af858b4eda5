use crate::config::LogFormat;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// Request completion is logged by `LoggingInterceptor`; tower-http spans only at debug.
const DEFAULT_FILTER: &str = "portfolio_server=info,tower_http=debug";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_keeps_tower_http_below_info() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());

        let directives: Vec<_> = DEFAULT_FILTER.split(',').collect();
        assert!(directives.contains(&"portfolio_server=info"));
        assert!(directives.contains(&"tower_http=debug"));
    }
}
