use tracing::{Event, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,spinner_host=info,spinner_shared=info";

// Bridged `log` records carry their origin as `log.*` fields; those are skipped.
#[derive(Default)]
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{:?}", value));
        } else if !field.name().starts_with("log.") {
            self.0.push_str(&format!(" {}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        } else if !field.name().starts_with("log.") {
            self.0.push_str(&format!(" {}={}", field.name(), value));
        }
    }
}

// Log lines go to stderr, stdout belongs to the wheel itself.
struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if visitor.0.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let target = metadata.target();
        match metadata.level().as_str() {
            "ERROR" => eprintln!("[{}] ❌ Error: {} - {}", timestamp, target, visitor.0),
            "WARN" => eprintln!("[{}] ⚠️ Warning: {} - {}", timestamp, target, visitor.0),
            "INFO" => eprintln!("[{}] ℹ️ {} - {}", timestamp, target, visitor.0),
            "DEBUG" => {
                if target.starts_with("spinner_shared") {
                    eprintln!("[{}] 🔄 {} - {}", timestamp, target, visitor.0);
                }
            }
            _ => {}
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter;
/// `log` records from the engine crate are bridged in as well.
pub fn setup() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    Registry::default()
        .with(env_filter)
        .with(ConsoleLayer)
        .try_init()
}
