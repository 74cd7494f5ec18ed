//! Per-snippet usage counters, persisted as JSON under one key per slug

use chrono::{DateTime, Utc};
use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::KeyValueStore;

const USAGE_KEY_PREFIX: &str = "bookmarklet-usage-";

pub fn usage_key(slug: &str) -> String {
    format!("{USAGE_KEY_PREFIX}{slug}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageEvent {
    Copy,
    Run,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCounter {
    #[serde(default)]
    pub copies: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl UsageCounter {
    /// Stored counter for `slug`; missing or unreadable records count as zero.
    pub fn load(store: &dyn KeyValueStore, slug: &str) -> Self {
        let Some(raw) = store.get(&usage_key(slug)) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("usage record for {slug} is unreadable ({err}), starting over");
            Self::default()
        })
    }

    pub fn apply(&mut self, event: UsageEvent, now: DateTime<Utc>) {
        match event {
            UsageEvent::Copy => self.copies = self.copies.saturating_add(1),
            UsageEvent::Run => self.runs = self.runs.saturating_add(1),
        }
        self.last_used = Some(now);
    }
}

/// Read-modify-write one event into `slug`'s counter and return the new value.
pub fn record(
    store: &mut dyn KeyValueStore,
    slug: &str,
    event: UsageEvent,
    now: DateTime<Utc>,
) -> Result<UsageCounter> {
    let mut counter = UsageCounter::load(store, slug);
    counter.apply(event, now);
    let raw = serde_json::to_string(&counter)?;
    store.set(&usage_key(slug), &raw)?;
    Ok(counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn first_copy_creates_record() {
        let mut store = MemoryStore::new();
        let counter = record(&mut store, "word-count", UsageEvent::Copy, at(1_700_000_000)).unwrap();
        assert_eq!(counter.copies, 1);
        assert_eq!(counter.runs, 0);

        let raw = store.get("bookmarklet-usage-word-count").unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["copies"], 1);
        assert_eq!(json["runs"], 0);
        assert_eq!(json["lastUsed"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn each_event_adds_exactly_one() {
        let mut store = MemoryStore::new();
        for i in 0..5 {
            record(&mut store, "a", UsageEvent::Copy, at(i)).unwrap();
        }
        record(&mut store, "a", UsageEvent::Run, at(10)).unwrap();
        let counter = UsageCounter::load(&store, "a");
        assert_eq!(counter.copies, 5);
        assert_eq!(counter.runs, 1);
        assert_eq!(counter.last_used, Some(at(10)));
    }

    #[test]
    fn reads_records_without_last_used() {
        let mut store = MemoryStore::new();
        store.set(&usage_key("a"), r#"{"copies":3,"runs":2}"#).unwrap();
        let counter = UsageCounter::load(&store, "a");
        assert_eq!(counter.copies, 3);
        assert_eq!(counter.runs, 2);
        assert_eq!(counter.last_used, None);
    }

    #[test]
    fn reads_browser_iso_timestamps() {
        let mut store = MemoryStore::new();
        store
            .set(&usage_key("a"), r#"{"copies":1,"runs":0,"lastUsed":"2024-03-01T12:00:00.000Z"}"#)
            .unwrap();
        let counter = UsageCounter::load(&store, "a");
        assert_eq!(counter.last_used, Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()));
    }

    #[test]
    fn corrupt_record_starts_over() {
        let mut store = MemoryStore::new();
        store.set(&usage_key("a"), "not json").unwrap();
        let counter = record(&mut store, "a", UsageEvent::Copy, at(5)).unwrap();
        assert_eq!(counter.copies, 1);
    }

    #[test]
    fn slugs_are_isolated() {
        let mut store = MemoryStore::new();
        record(&mut store, "a", UsageEvent::Copy, at(1)).unwrap();
        assert_eq!(UsageCounter::load(&store, "b"), UsageCounter::default());
    }
}
