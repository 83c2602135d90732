//! Customer and admin audit entries.

use serde_json::{Map, Value};

use mnemosyne_core::CallerContext;
use mnemosyne_sink::Sink;

use crate::enrich;
use crate::logger::LeveledLogger;

impl LeveledLogger {
    /// Writes a customer-facing audit entry.
    ///
    /// The enrichment record derived from `ctx` (requester identity,
    /// request metadata, session cookies, response status) is merged into
    /// `fields`, with enrichment keys winning on conflict, and the merged
    /// map is appended to the customer log as one JSON line. Without a
    /// context, `fields` is written as-is.
    pub fn record(&self, ctx: Option<&dyn CallerContext>, fields: Map<String, Value>) {
        let mut entry = fields;
        if let Some(ctx) = ctx {
            for (key, value) in enrich::customer_enrichment(ctx) {
                entry.insert(key, value);
            }
        }
        append_entry(self.customer_sink(), entry);
    }

    /// Writes an admin audit entry.
    ///
    /// Uses the narrower company/account enrichment and sets its own
    /// `status` field into the map from the context's last response status
    /// before writing.
    pub fn admin(&self, ctx: Option<&dyn CallerContext>, fields: Map<String, Value>) {
        let mut entry = fields;
        if let Some(ctx) = ctx {
            for (key, value) in enrich::admin_enrichment(ctx) {
                entry.insert(key, value);
            }
        }
        append_entry(self.admin_sink(), entry);
    }
}

fn append_entry(sink: &dyn Sink, entry: Map<String, Value>) {
    let line = Value::Object(entry).to_string();
    if let Err(error) = sink.append_line(&line) {
        tracing::warn!(path = %sink.path().display(), %error, "dropping audit entry after write failure");
    }
}
