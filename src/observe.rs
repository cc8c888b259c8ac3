use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// One resolved redirect, as reported to the access log. `from` is the raw
/// request path, before normalization.
#[derive(Debug, Serialize)]
pub struct ResolveRecord<'a> {
    pub time: String,
    pub from: &'a str,
    pub to: &'a str,
    pub code: u16,
}

impl<'a> ResolveRecord<'a> {
    pub fn now(from: &'a str, to: &'a str, code: u16) -> Self {
        let time = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();

        Self {
            time,
            from,
            to,
            code,
        }
    }
}

/// Observation only: implementations must never alter the resolution result,
/// and their failures must not stop the redirect response.
pub trait ResolveObserver: Send + Sync {
    fn observe(&self, record: &ResolveRecord<'_>);
}

/// Writes each record as a single JSON line on stdout.
pub struct JsonLineObserver;

impl ResolveObserver for JsonLineObserver {
    fn observe(&self, record: &ResolveRecord<'_>) {
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(error) => tracing::warn!(%error, "failed to serialize resolve record"),
        }
    }
}
