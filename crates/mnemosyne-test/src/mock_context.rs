//! Mock caller contexts for audit-logging tests.
//!
//! [`MockContext`] implements [`CallerContext`] over plain owned data with
//! a fluent builder, so tests can assemble exactly the request shape they
//! need. Factory methods cover the two common shapes: an authenticated
//! end-user request and an operator (admin) request.
//!
//! # Examples
//!
//! ```rust
//! use mnemosyne_test::MockContext;
//! use mnemosyne_core::{CallerContext, UserIdentity};
//! use serde_json::json;
//!
//! let ctx = MockContext::new()
//!     .with_user(UserIdentity::user("u-1", "alice"))
//!     .with_method_uri("POST", "/api/orders")
//!     .with_arg("qty", json!(2))
//!     .with_status(201);
//!
//! assert_eq!(ctx.response_status(), Some(201));
//! ```

use std::collections::HashMap;

use serde_json::Value;

use mnemosyne_core::{CallerContext, RequestInfo, UserIdentity};

/// A [`CallerContext`] backed by plain data, for tests.
#[derive(Debug, Clone, Default)]
pub struct MockContext {
    user: Option<UserIdentity>,
    request: Option<RequestInfo>,
    cookies: HashMap<String, String>,
    status: Option<u16>,
}

impl MockContext {
    /// Creates an empty context: no user, no request, no cookies, no
    /// status. Enrichment built from it degrades to empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An authenticated end-user GET request with typical browser
    /// headers, a session cookie and a 200 response.
    #[must_use]
    pub fn end_user() -> Self {
        Self::new()
            .with_user(UserIdentity::user("user-1001", "alice").with_company("company-7"))
            .with_method_uri("GET", "/api/profile")
            .with_remote_ip("198.51.100.20")
            .with_header("User-Agent", "Mozilla/5.0 (test)")
            .with_header("Referer", "https://app.example.com/home")
            .with_cookie("session_id", "sess-abc123")
            .with_cookie("client_id", "client-xyz789")
            .with_status(200)
    }

    /// An operator request carrying company/account identity and a 200
    /// response.
    #[must_use]
    pub fn operator() -> Self {
        Self::new()
            .with_user(
                UserIdentity::user("op-1", "ops")
                    .with_company("company-7")
                    .with_account("ops-admin"),
            )
            .with_method_uri("POST", "/admin/settings")
            .with_remote_ip("203.0.113.5")
            .with_status(200)
    }

    /// Sets the authenticated user.
    #[must_use]
    pub fn with_user(mut self, user: UserIdentity) -> Self {
        self.user = Some(user);
        self
    }

    /// Replaces the whole request value.
    #[must_use]
    pub fn with_request(mut self, request: RequestInfo) -> Self {
        self.request = Some(request);
        self
    }

    /// Sets the request method and URI, creating the request if needed.
    #[must_use]
    pub fn with_method_uri(mut self, method: impl Into<String>, uri: impl Into<String>) -> Self {
        let request = self.request.get_or_insert_with(RequestInfo::default);
        request.method = method.into();
        request.uri = uri.into();
        self
    }

    /// Sets the raw connection address.
    #[must_use]
    pub fn with_remote_ip(mut self, ip: impl Into<String>) -> Self {
        self.request.get_or_insert_with(RequestInfo::default).remote_ip = ip.into();
        self
    }

    /// Adds a request header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .get_or_insert_with(RequestInfo::default)
            .headers
            .insert(name.into(), value.into());
        self
    }

    /// Adds a request argument.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.request
            .get_or_insert_with(RequestInfo::default)
            .args
            .insert(name.into(), value);
        self
    }

    /// Adds a secure-cookie value.
    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Sets the last response status code.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl CallerContext for MockContext {
    fn current_user(&self) -> Option<UserIdentity> {
        self.user.clone()
    }

    fn request(&self) -> Option<RequestInfo> {
        self.request.clone()
    }

    fn secure_cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    fn response_status(&self) -> Option<u16> {
        self.status
    }
}
