//! The caller-context capability consumed by the audit sinks.
//!
//! The logger never builds one of these itself; the surrounding application
//! (typically its web layer) implements [`CallerContext`] over whatever
//! request object it has, and the logger reads identity and request
//! metadata through it when assembling customer/admin enrichment records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity fields of the authenticated requester.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// End-user identifier.
    pub user_id: String,
    /// End-user display name.
    pub user_name: String,
    /// Company the user belongs to.
    pub company_id: String,
    /// Admin account name, when the requester is an operator.
    pub account: String,
}

impl UserIdentity {
    /// Creates an end-user identity.
    #[must_use]
    pub fn user(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            ..Self::default()
        }
    }

    /// Sets the company identifier.
    #[must_use]
    pub fn with_company(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = company_id.into();
        self
    }

    /// Sets the admin account name.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }
}

/// HTTP request metadata exposed by the caller context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestInfo {
    /// Request method.
    pub method: String,
    /// Request URI.
    pub uri: String,
    /// Header map as received.
    pub headers: HashMap<String, String>,
    /// Remote address of the connection.
    pub remote_ip: String,
    /// Request argument map (query/form fields).
    pub args: Map<String, Value>,
}

impl RequestInfo {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Capability object the audit methods read enrichment fields from.
///
/// Every accessor is optional: a partial context (no authenticated user, no
/// request, no response yet) degrades to empty enrichment fields and never
/// produces an error.
pub trait CallerContext {
    /// Currently authenticated requester, if any.
    fn current_user(&self) -> Option<UserIdentity>;

    /// Metadata of the request being served, if any.
    fn request(&self) -> Option<RequestInfo>;

    /// Reads a value from the secure (signed) cookie jar.
    fn secure_cookie(&self, name: &str) -> Option<String>;

    /// Status code most recently set on the response, if any.
    fn response_status(&self) -> Option<u16>;
}
