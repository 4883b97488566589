use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{self as sdk, Resource};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "info,tower_http=warn";

/// Configuration for tracing initialization.
#[derive(Clone, Debug)]
pub struct ObsConfig {
    pub service_name: &'static str,
    pub env_filter: Option<String>,
    pub otlp_endpoint: Option<String>,
    pub with_target: bool,
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self {
            service_name: "directory-server",
            env_filter: None,
            otlp_endpoint: None,
            with_target: false,
        }
    }
}

impl ObsConfig {
    pub fn service(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Self::default()
        }
    }

    fn resolved_filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }

    fn resolved_endpoint(&self) -> Option<String> {
        self.otlp_endpoint
            .clone()
            .or_else(|| std::env::var("OTLP_ENDPOINT").ok())
            .filter(|endpoint| !endpoint.trim().is_empty())
    }
}

/// Keeps the span exporter alive; pending spans are flushed when dropped.
#[must_use = "dropping the guard shuts the span exporter down"]
#[derive(Default)]
pub struct ObsGuard {
    provider: Option<sdk::trace::SdkTracerProvider>,
}

impl Drop for ObsGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(err) = provider.shutdown() {
                eprintln!("failed to flush spans: {err}");
            }
        }
    }
}

/// Install tracing subscribers with optional OTLP exporter.
///
/// Calling this more than once is a no-op that returns an empty guard.
pub fn init_tracing(config: ObsConfig) -> Result<ObsGuard> {
    if INIT.get().is_some() {
        return Ok(ObsGuard::default());
    }

    let env_filter = EnvFilter::try_new(config.resolved_filter())?;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(config.with_target);
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    let guard = if let Some(endpoint) = config.resolved_endpoint() {
        let exporter = SpanExporter::builder()
            .with_http()
            .with_protocol(Protocol::HttpBinary)
            .with_endpoint(endpoint)
            .build()?;

        let resource = Resource::builder()
            .with_service_name(config.service_name)
            .build();

        let provider = sdk::trace::SdkTracerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(exporter)
            .build();
        let tracer = provider.tracer(config.service_name);

        registry
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()?;
        ObsGuard {
            provider: Some(provider),
        }
    } else {
        registry.try_init()?;
        ObsGuard::default()
    };

    INIT.set(())
        .map_err(|_| anyhow!("tracing already initialized"))?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_default() {
        let config = ObsConfig {
            env_filter: Some("debug".into()),
            ..ObsConfig::service("directory-tests")
        };
        assert_eq!(config.resolved_filter(), "debug");
        assert_eq!(config.service_name, "directory-tests");
    }

    #[test]
    fn blank_endpoint_disables_exporter() {
        let config = ObsConfig {
            otlp_endpoint: Some("  ".into()),
            ..ObsConfig::default()
        };
        assert_eq!(config.resolved_endpoint(), None);
    }

    #[test]
    fn second_init_is_a_no_op() {
        let config = ObsConfig {
            env_filter: Some("warn".into()),
            otlp_endpoint: Some(String::new()),
            ..ObsConfig::default()
        };
        let _first = init_tracing(config.clone()).unwrap();
        let second = init_tracing(config).unwrap();
        assert!(second.provider.is_none());
    }
}
