//! Colored stderr output for Concord events.
//!
//! Provides a custom `tracing` layer for events emitted by the Concord
//! crates. Stdout is left to the programs themselves.

use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter used when neither the caller nor `RUST_LOG` provides one.
pub const DEFAULT_DIRECTIVE: &str = "concord_core=warn";

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes stderr logging.
///
/// Safe to call multiple times - only the first call has effect. The
/// filter is `directive` when given and valid, else `RUST_LOG`, else
/// [`DEFAULT_DIRECTIVE`].
pub fn init(directive: Option<&str>) {
    INIT.get_or_init(|| {
        let rejected = directive.filter(|d| EnvFilter::try_new(d).is_err());
        let filter = directive
            .and_then(|d| EnvFilter::try_new(d).ok())
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ConcordConsoleLayer)
            .try_init();

        if let Some(directive) = rejected {
            tracing::warn!(target: "concord", directive, "Ignoring invalid log filter");
        }
    });
}

/// A tracing layer that formats Concord events with colors.
pub struct ConcordConsoleLayer;

impl<S: Subscriber> Layer<S> for ConcordConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Only handle concord events
        if !target.starts_with("concord") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let line = format_event(*metadata.level(), target, &visitor);
        let _ = writeln!(io::stderr(), "{}", line);
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    event: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record_str(field, &format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "event" => self.event = Some(value.to_string()),
            name => self.fields.push((name, value.to_string())),
        }
    }
}

fn format_event(level: Level, target: &str, v: &EventVisitor) -> String {
    let mut line = format!(
        "{} {} {}",
        timestamp().bright_black(),
        format_level(level),
        format!("[{}]", target).bright_cyan()
    );

    if let Some(event) = &v.event {
        let _ = write!(line, " {}", event.white().bold());
    }
    if let Some(message) = &v.message {
        let _ = write!(line, " {}", message);
    }
    for (name, value) in &v.fields {
        let _ = write!(line, " {}={}", name.bright_black(), value.yellow());
    }

    line
}

fn format_level(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => " WARN".bright_yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_magenta().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}
