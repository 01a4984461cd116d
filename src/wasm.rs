//! WASM bindings for the dotspark-core library.
//!
//! All functions and types exposed to JavaScript via wasm-bindgen are defined
//! here. The boundary is JSON strings in both directions; malformed input is
//! logged to the console and surfaced as an `error` field in the output,
//! never as an exception.

use chrono::DateTime;
use wasm_bindgen::prelude::*;

use crate::layout::{compute_grid_plan, filter_recent, layout_cloud, GridConfig, PositionCache};
use crate::model::{parse_feed, parse_notifications};
use crate::output::CloudOutput;
use crate::store::{Signal, SignalHub};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

// Native stand-ins so the rlib (and its tests) run off-browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(s: &str) {
    println!("{s}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_error(s: &str) {
    eprintln!("{s}");
}

/// One cloud view's layout session. Owns the position cache and the signal
/// hub; created on mount, dropped on unmount. A full page reload therefore
/// clears all cached positions, as designed.
#[wasm_bindgen]
pub struct CloudSession {
    cache: PositionCache,
    cfg: GridConfig,
    hub: SignalHub,
}

impl Default for CloudSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CloudSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CloudSession {
        CloudSession {
            cache: PositionCache::new(),
            cfg: GridConfig::default(),
            hub: SignalHub::new(),
        }
    }

    /// Create a session with a (possibly partial) grid config as JSON.
    /// Unparseable config falls back to the defaults with a console error.
    pub fn with_config(config_json: &str) -> CloudSession {
        let cfg = match serde_json::from_str::<GridConfig>(config_json) {
            Ok(cfg) => cfg,
            Err(e) => {
                console_error(&format!("Invalid grid config, using defaults: {e}"));
                GridConfig::default()
            }
        };
        CloudSession { cache: PositionCache::new(), cfg, hub: SignalHub::new() }
    }

    /// Lay out a thoughts-listing response body and return the positioned
    /// cloud as JSON (`{ dots, plan }`, or `{ dots: [], error }` on bad
    /// input).
    ///
    /// `now_ms` is the caller's current time as epoch milliseconds; it only
    /// feeds the recency filter, so layout stays deterministic.
    pub fn layout(
        &mut self,
        feed_json: &str,
        viewport_width_px: f64,
        container_width_px: f64,
        container_height_px: f64,
        recent_only: bool,
        now_ms: f64,
    ) -> String {
        let feed = match parse_feed(feed_json) {
            Ok(feed) => feed,
            Err(e) => {
                console_error(&format!("Error parsing thoughts feed: {e}"));
                let output = CloudOutput::from_error(e.msg);
                return serde_json::to_string(&output).unwrap();
            }
        };

        let mut items = feed.thoughts;
        if recent_only {
            if let Some(now) = DateTime::from_timestamp_millis(now_ms as i64) {
                items = filter_recent(items, now);
            } else {
                console_error(&format!("Ignoring recent-only filter: bad timestamp {now_ms}"));
            }
        }

        let plan = compute_grid_plan(
            items.len(),
            viewport_width_px,
            container_width_px,
            container_height_px,
            &self.cfg,
        );
        let dots = layout_cloud(&items, &mut self.cache, &plan);

        let output = CloudOutput { dots, plan: Some(plan), error: None };
        serde_json::to_string(&output).unwrap()
    }

    /// The Refresh button: forget all cached positions (the next pass
    /// re-rolls the cloud) and signal subscribers.
    pub fn refresh(&mut self) {
        self.cache.clear();
        self.hub.publish(Signal::RefreshRequested);
    }

    /// Number of placements currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Flip the DotSpark activation flag and signal subscribers.
    pub fn set_activation(&mut self, active: bool) {
        self.hub.publish(Signal::Activation { active });
    }

    pub fn is_activated(&self) -> bool {
        self.hub.is_activated()
    }

    /// Validate a notifications response body, publish each notification to
    /// the hub, and return the normalized payload as JSON. Invalid payloads
    /// (including unknown notification types) return `{"error": ...}`.
    pub fn ingest_notifications(&mut self, json: &str) -> String {
        let payload = match parse_notifications(json) {
            Ok(payload) => payload,
            Err(e) => {
                console_error(&format!("Error parsing notifications: {e}"));
                return serde_json::to_string(
                    &serde_json::json!({ "error": e.msg }),
                )
                .unwrap();
            }
        };
        for notification in &payload.notifications {
            self.hub.publish(Signal::Notification(notification.clone()));
        }
        serde_json::to_string(&payload).unwrap()
    }
}
