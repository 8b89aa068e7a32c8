use cors_filter::constants::method;
use cors_filter::{CorsConfig, CorsDecision, CorsPolicy, RequestContext};

pub const LOCAL_ORIGIN: &str = "http://foo.com";

pub struct PolicyBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            pairs: vec![("local_origin", LOCAL_ORIGIN.to_string())],
        }
    }

    fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    pub fn local_origin(self, value: impl Into<String>) -> Self {
        self.set("local_origin", value)
    }

    pub fn allow_origins(self, value: impl Into<String>) -> Self {
        self.set("allow_origins", value)
    }

    pub fn allow_methods(self, value: impl Into<String>) -> Self {
        self.set("allow_methods", value)
    }

    pub fn allow_headers(self, value: impl Into<String>) -> Self {
        self.set("allow_headers", value)
    }

    pub fn expose_headers(self, value: impl Into<String>) -> Self {
        self.set("expose_headers", value)
    }

    pub fn config(self) -> CorsConfig {
        CorsConfig::from_pairs(self.pairs)
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::from_config(self.config()).expect("valid CORS configuration")
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        policy.evaluate(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        policy.evaluate(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

/// Policy used throughout the scenarios: `bar.com` may `GET` with two custom headers.
pub fn scenario_policy() -> PolicyBuilder {
    policy()
        .allow_origins("http://bar.com")
        .allow_methods("GET")
        .allow_headers("X-Custom1,X-Custom2")
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
