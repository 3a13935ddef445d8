use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    propagation::TraceContextPropagator,
    trace::{Sampler, SdkTracerProvider},
    Resource,
};
use opentelemetry_semantic_conventions::resource;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::infrastructure::config::TelemetrySettings;

/// Builder for setting up telemetry (logging and tracing).
pub struct TelemetryBuilder {
    service_name: String,
    service_version: String,
    otlp_endpoint: Option<String>,
    log_level: String,
    log_dir: Option<PathBuf>,
    sampling_ratio: f64,
}

/// Keeps log writers and the trace exporter alive; flushes them on drop.
#[must_use = "telemetry stops flushing once the guard is dropped"]
pub struct TelemetryGuard {
    _file_writer: Option<WorkerGuard>,
    tracer_provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to shut down tracer provider: {e}");
            }
        }
    }
}

impl TelemetryBuilder {
    /// Starts a builder with stdout JSON logging at `info`.
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            otlp_endpoint: None,
            log_level: "info".to_string(),
            log_dir: None,
            sampling_ratio: 1.0,
        }
    }

    /// Applies every option present in `settings`.
    #[must_use]
    pub fn from_settings(settings: &TelemetrySettings, service_version: &str) -> Self {
        let mut builder = Self::new(settings.service_name.clone(), service_version)
            .with_log_level(settings.log_level.clone())
            .with_sampling_ratio(settings.sampling_ratio);
        if let Some(endpoint) = &settings.otlp_endpoint {
            builder = builder.with_tracing(endpoint.clone());
        }
        if let Some(dir) = &settings.log_dir {
            builder = builder.with_log_dir(dir.clone());
        }
        builder
    }

    /// Exports spans to the OTLP collector at `endpoint`.
    #[must_use]
    pub fn with_tracing(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    /// Default filter directive when `RUST_LOG` is unset.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Also writes JSON logs to a daily-rolling file in `dir`.
    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Fraction of root traces to sample.
    #[must_use]
    pub fn with_sampling_ratio(mut self, ratio: f64) -> Self {
        self.sampling_ratio = ratio;
        self
    }

    /// Initializes the global subscriber with the configured layers.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The OTLP span exporter cannot be built
    /// - A global subscriber is already installed
    pub fn init(self) -> Result<TelemetryGuard> {
        opentelemetry::global::set_text_map_propagator(TraceContextPropagator::new());

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let stdout_layer = fmt::layer().json().with_span_events(FmtSpan::CLOSE).boxed();

        let (file_layer, file_writer) = match &self.log_dir {
            Some(dir) => {
                let appender =
                    tracing_appender::rolling::daily(dir, format!("{}.log", self.service_name));
                let (writer, guard) = tracing_appender::non_blocking(appender);
                (Some(fmt::layer().json().with_writer(writer)), Some(guard))
            }
            None => (None, None),
        };

        let tracer_provider = match &self.otlp_endpoint {
            Some(endpoint) => Some(self.build_tracer_provider(endpoint)?),
            None => None,
        };
        let otel_layer = tracer_provider.as_ref().map(|provider| {
            tracing_opentelemetry::layer().with_tracer(provider.tracer("taskforce-server"))
        });

        Registry::default()
            .with(env_filter)
            .with(stdout_layer)
            .with(file_layer)
            .with(otel_layer)
            .try_init()
            .context("Failed to init subscriber")?;

        Ok(TelemetryGuard {
            _file_writer: file_writer,
            tracer_provider,
        })
    }

    fn build_tracer_provider(&self, endpoint: &str) -> Result<SdkTracerProvider> {
        let resource = Resource::builder()
            .with_attributes(vec![
                opentelemetry::KeyValue::new(resource::SERVICE_NAME, self.service_name.clone()),
                opentelemetry::KeyValue::new(
                    resource::SERVICE_VERSION,
                    self.service_version.clone(),
                ),
            ])
            .build();

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to build OTLP span exporter")?;

        let processor = opentelemetry_sdk::trace::BatchSpanProcessor::builder(exporter).build();

        let provider = SdkTracerProvider::builder()
            .with_span_processor(processor)
            .with_resource(resource)
            .with_sampler(Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
                self.sampling_ratio,
            ))))
            .build();

        opentelemetry::global::set_tracer_provider(provider.clone());
        Ok(provider)
    }
}
