//! Real-time log streaming using Server-Sent Events (SSE).
//!
//! Connects to the backend's `/api/logs` endpoint and displays
//! scrape and upload progress with auto-scroll support.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use crate::{LogEntry, LogLevel, BACKEND_URL, MAX_LOG_ENTRIES};

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Parse SSE log entry into our LogEntry format
pub fn parse_sse_log(json: &str) -> Option<LogEntry> {
    let value: serde_json::Value = serde_json::from_str(json).ok()?;
    let level = match value.get("level")?.as_str()? {
        "success" => LogLevel::Success,
        "warning" => LogLevel::Warning,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    };
    let message = value.get("message")?.as_str()?;
    let indent = value.get("indent").and_then(|v| v.as_u64()).unwrap_or(0) as usize;

    Some(LogEntry {
        level,
        message: format!("{}{}", "  ".repeat(indent), message),
        timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
    })
}

/// Append an entry, dropping the oldest past `MAX_LOG_ENTRIES`.
pub fn push_capped(logs: &mut Vec<LogEntry>, entry: LogEntry) {
    logs.push(entry);
    if logs.len() > MAX_LOG_ENTRIES {
        let excess = logs.len() - MAX_LOG_ENTRIES;
        logs.drain(..excess);
    }
}

/// Start SSE connection to receive real-time logs
/// Should be called ONCE at app startup
pub fn init_sse_logs(set_logs: WriteSignal<Vec<LogEntry>>) {
    let sse_url = format!("{}/api/logs", BACKEND_URL);

    let event_source = match EventSource::new(&sse_url) {
        Ok(es) => es,
        Err(e) => {
            log::error!("Failed to create EventSource: {:?}", e);
            return;
        }
    };

    let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Some(entry) = event.data().as_string().as_deref().and_then(parse_sse_log) {
            set_logs.update(|logs| push_capped(logs, entry));
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    event_source.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    let onopen = Closure::wrap(Box::new(move |_: web_sys::Event| {
        log::info!("📡 SSE connected to logs stream");
    }) as Box<dyn FnMut(web_sys::Event)>);

    event_source.set_onopen(Some(onopen.as_ref().unchecked_ref()));
    onopen.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        log::warn!("SSE connection error - will auto-reconnect");
    }) as Box<dyn FnMut(web_sys::Event)>);

    event_source.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    // Lives for the app's lifetime
    std::mem::forget(event_source);

    log::info!("📡 SSE log stream initialized");
}

/// Backend logs panel (display only, SSE is initialized elsewhere)
#[component]
pub fn LogsPanel(
    logs: ReadSignal<Vec<LogEntry>>,
    /// For clearing
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        logs.with(|_| ());

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="border border-gray-200 rounded-2xl bg-gray-50 text-sm">
            <div class="flex justify-between items-center px-4 py-2 border-b border-gray-200">
                <span class="font-semibold">"📋 Backend Logs"</span>
                <button
                    class="text-gray-500 hover:text-gray-800"
                    on:click=move |_| set_logs.set(vec![])
                >
                    "Clear"
                </button>
            </div>
            <div class="max-h-64 overflow-y-auto px-4 py-2 font-mono" node_ref=logs_container>
                <For
                    each=move || logs.get().into_iter().enumerate()
                    key=|(i, entry)| (*i, entry.timestamp.clone(), entry.message.clone())
                    children=move |(_, entry)| {
                        view! {
                            <div class=format!("whitespace-pre {}", entry.level.css_class())>
                                <span class="text-gray-400">"[" {entry.timestamp.clone()} "] "</span>
                                {entry.message.clone()}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sse_log() {
        let entry = parse_sse_log(r#"{"level":"success","message":"Scraped 4 reviews","indent":0}"#)
            .unwrap();
        assert_eq!(entry.level, LogLevel::Success);
        assert_eq!(entry.message, "Scraped 4 reviews");

        let nested = parse_sse_log(r#"{"level":"warning","message":"Skipped card","indent":1}"#)
            .unwrap();
        assert_eq!(nested.level, LogLevel::Warning);
        assert_eq!(nested.message, "  Skipped card");
    }

    #[test]
    fn test_parse_sse_log_rejects_garbage() {
        assert!(parse_sse_log("not json").is_none());
        assert!(parse_sse_log(r#"{"message":"no level"}"#).is_none());
    }

    #[test]
    fn test_push_capped() {
        let mut logs = Vec::new();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            push_capped(
                &mut logs,
                LogEntry {
                    level: LogLevel::Info,
                    message: format!("line {}", i),
                    timestamp: String::new(),
                },
            );
        }
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "line 5");
    }
}
