//! Enrichment records and argument redaction for the audit sinks.
//!
//! The customer record carries the end-user view of a request; the admin
//! record the narrower company/account view. Both run the argument map
//! through [`redact_args`] before it is written anywhere.

use serde_json::{Map, Value};

use mnemosyne_core::CallerContext;

/// Fixed replacement for masked argument values.
pub const MASKED_VALUE: &str = "xxxxxx";

/// Argument keys that are always masked.
pub const MASKED_ARG_KEYS: [&str; 3] = ["password", "_password", "_repassword"];

/// Argument key whose raw value (an image payload) is replaced by the
/// requesting user's identifier.
pub const IMAGE_DATA_KEY: &str = "imgdata";

/// Masks secret and binary argument values in place.
///
/// Unconditional: every present masked key is overwritten with
/// [`MASKED_VALUE`], and [`IMAGE_DATA_KEY`] with `user_id`, before the map
/// enters any log line.
pub fn redact_args(args: &mut Map<String, Value>, user_id: &str) {
    for key in MASKED_ARG_KEYS {
        if let Some(value) = args.get_mut(key) {
            *value = Value::from(MASKED_VALUE);
        }
    }
    if let Some(value) = args.get_mut(IMAGE_DATA_KEY) {
        *value = Value::from(user_id);
    }
}

fn text(value: Option<String>) -> Value {
    Value::from(value.unwrap_or_default())
}

/// Builds the customer enrichment record from a caller context.
///
/// Absent fields degrade to empty strings; a partial context never
/// produces an error.
pub(crate) fn customer_enrichment(ctx: &dyn CallerContext) -> Map<String, Value> {
    let user = ctx.current_user().unwrap_or_default();
    let request = ctx.request().unwrap_or_default();

    let remote_ip = request
        .header("X-Real-IP")
        .map_or_else(|| request.remote_ip.clone(), ToString::to_string);
    let user_agent = request.header("User-Agent").unwrap_or_default().to_string();
    let referer = request.header("Referer").unwrap_or_default().to_string();

    let mut args = request.args;
    redact_args(&mut args, &user.user_id);

    let mut map = Map::new();
    map.insert("user_id".to_string(), Value::from(user.user_id));
    map.insert("user_name".to_string(), Value::from(user.user_name));
    map.insert("company_id".to_string(), Value::from(user.company_id));
    map.insert("user_agent".to_string(), Value::from(user_agent));
    map.insert("referer".to_string(), Value::from(referer));
    map.insert("remote_ip".to_string(), Value::from(remote_ip));
    map.insert("method".to_string(), Value::from(request.method));
    map.insert("uri".to_string(), Value::from(request.uri));
    map.insert("args".to_string(), Value::Object(args));
    map.insert(
        "session_id".to_string(),
        text(ctx.secure_cookie("session_id")),
    );
    map.insert("client_id".to_string(), text(ctx.secure_cookie("client_id")));
    map.insert("status".to_string(), status_value(ctx));
    map
}

/// Builds the admin enrichment record: company/account identity rather
/// than end-user identity, plus the request line and status.
pub(crate) fn admin_enrichment(ctx: &dyn CallerContext) -> Map<String, Value> {
    let user = ctx.current_user().unwrap_or_default();
    let request = ctx.request().unwrap_or_default();

    let remote_ip = request
        .header("X-Real-IP")
        .map_or_else(|| request.remote_ip.clone(), ToString::to_string);

    let mut args = request.args;
    redact_args(&mut args, &user.user_id);

    let mut map = Map::new();
    map.insert("company_id".to_string(), Value::from(user.company_id));
    map.insert("account".to_string(), Value::from(user.account));
    map.insert("remote_ip".to_string(), Value::from(remote_ip));
    map.insert("method".to_string(), Value::from(request.method));
    map.insert("uri".to_string(), Value::from(request.uri));
    map.insert("args".to_string(), Value::Object(args));
    map.insert("status".to_string(), status_value(ctx));
    map
}

fn status_value(ctx: &dyn CallerContext) -> Value {
    ctx.response_status()
        .map_or_else(|| Value::from(""), Value::from)
}
