use std::str::FromStr;

use thiserror::Error;
use tracing::{span, Level};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::{PrettyVisitor, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;
use wasm_bindgen::prelude::*;

/// Crates whose events reach the console.
const LOG_TARGETS: [&str; 2] = ["bas_leptos", "bas_state"];

#[derive(Error, Debug)]
pub enum LoggerErr {
    #[error("global subscriber already set: {0}")]
    AlreadySet(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[derive(Debug, Clone)]
struct SpanBody(pub String);

pub struct WASMTracingLayer {
    pub config: LoggerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    pub target: bool,
    pub line: bool,
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            target: false,
            line: false,
            level: parse_level(option_env!("BAS_LOG")).unwrap_or(default_level()),
        }
    }
}

fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Reads a level baked in at build time, e.g. `BAS_LOG=trace trunk serve`.
pub fn parse_level(value: Option<&str>) -> Option<Level> {
    value.and_then(|v| Level::from_str(v.trim()).ok())
}

pub fn simple_logger_init(config: LoggerConfig) -> Result<(), LoggerErr> {
    let filter = LOG_TARGETS
        .into_iter()
        .fold(Targets::new(), |targets, target| {
            targets.with_target(target, config.level)
        });

    let subscriber = tracing_subscriber::Registry::default()
        .with(WASMTracingLayer::new(config).with_filter(filter));
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

impl WASMTracingLayer {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }
}

/// Outermost span first, padded for the `%c` slot it lands in.
fn join_spans(innermost_first: &[String]) -> String {
    if innermost_first.is_empty() {
        return String::new();
    }
    innermost_first
        .iter()
        .rev()
        .fold(String::from(" "), |mut a, b| {
            a += b;
            a += " ";
            a
        })
}

fn level_style(level: Level) -> &'static str {
    match level {
        Level::TRACE => "color: dodgerblue; background: #444",
        Level::DEBUG => "color: lawngreen; background: #444",
        Level::INFO => "color: whitesmoke; background: #444",
        Level::WARN => "color: orange; background: #444",
        Level::ERROR => "color: red; background: #444",
    }
}

impl<S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>> Layer<S>
    for WASMTracingLayer
{
    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut span_text: Vec<String> = Vec::new();
        let mut current_span = ctx.current_span().id().and_then(|id| ctx.span(id));

        while let Some(span) = current_span {
            let name = span.metadata().name();
            let extensions = span.extensions();

            match extensions.get::<SpanBody>() {
                Some(span_body) => span_text.push(format!("{}({})", &name, span_body.0)),
                None => span_text.push(name.to_string()),
            }

            current_span = span.parent();
        }
        let spans_combined = join_spans(&span_text);

        let mut value = String::new();
        {
            let writer = Writer::new(&mut value);
            let mut visitor = PrettyVisitor::new(writer, true);
            event.record(&mut visitor);
        }

        let meta = event.metadata();
        let level = *meta.level();
        let target = if self.config.target {
            format!(" {}", meta.target())
        } else {
            String::new()
        };
        let origin = if self.config.line || level == Level::ERROR || level == Level::WARN {
            meta.file()
                .and_then(|file| meta.line().map(|ln| format!(" {}:{}", file, ln)))
                .unwrap_or_default()
        } else {
            String::new()
        };

        log5(
            format!("%c{level}%c{spans_combined}%c{target}{origin}%c: {value}"),
            level_style(level),
            "color: inherit; font-weight: bold",
            "color: gray; font-style: italic",
            "color: inherit",
        );
    }

    fn on_new_span(
        &self,
        attrs: &span::Attributes<'_>,
        id: &span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut span_body = String::new();
        let writer = Writer::new(&mut span_body);
        let mut visitor = PrettyVisitor::new(writer, true);
        attrs.record(&mut visitor);
        if span_body.is_empty() {
            return;
        }
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(SpanBody(span_body));
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn log5(message1: String, message2: &str, message3: &str, message4: &str, message5: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_build_env() {
        assert_eq!(parse_level(Some("trace")), Some(Level::TRACE));
        assert_eq!(parse_level(Some(" WARN ")), Some(Level::WARN));
        assert_eq!(parse_level(Some("loud")), None);
        assert_eq!(parse_level(None), None);
    }

    #[test]
    fn spans_are_outermost_first() {
        assert_eq!(join_spans(&[]), "");
        let spans = vec![
            String::from("event_listener(event: scroll)"),
            String::from("scroll tracker"),
        ];
        assert_eq!(
            join_spans(&spans),
            " scroll tracker event_listener(event: scroll) "
        );
    }

    #[test]
    fn every_level_is_styled() {
        for level in [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR] {
            assert!(level_style(level).starts_with("color: "));
        }
    }
}
