pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
}

/// Configuration keys read by `CorsConfig::from_pairs`.
pub mod config_key {
    pub const LOCAL_ORIGIN: &str = "local_origin";
    pub const ALLOW_ORIGINS: &str = "allow_origins";
    pub const ALLOW_METHODS: &str = "allow_methods";
    pub const ALLOW_HEADERS: &str = "allow_headers";
    pub const EXPOSE_HEADERS: &str = "expose_headers";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Seconds a browser may cache a successful preflight result (20 days).
pub const PREFLIGHT_MAX_AGE: u64 = 1_728_000;

/// Allow-list entry that authorizes every origin.
pub const WILDCARD: &str = "*";
