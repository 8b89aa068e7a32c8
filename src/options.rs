use crate::allowed_origins::AllowedOrigins;
use crate::token_list::TokenList;
use crate::util::{is_http_token, normalize_lower};
use thiserror::Error;

/// Parsed, immutable CORS policy configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    /// Canonical origin of this service. Requests carrying it are not CORS requests.
    pub local_origin: String,
    pub allow_origins: AllowedOrigins,
    pub allow_methods: TokenList,
    pub allow_headers: TokenList,
    /// Headers advertised on actual responses. `None` falls back to `allow_headers`.
    pub expose_headers: Option<TokenList>,
}

impl CorsOptions {
    pub fn new<S: AsRef<str>>(local_origin: S) -> Self {
        Self {
            local_origin: normalize_lower(local_origin.as_ref().trim()),
            allow_origins: AllowedOrigins::default(),
            allow_methods: TokenList::default(),
            allow_headers: TokenList::default(),
            expose_headers: None,
        }
    }

    /// The list emitted as `Access-Control-Expose-Headers`.
    pub fn exposed_headers(&self) -> &TokenList {
        self.expose_headers.as_ref().unwrap_or(&self.allow_headers)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.local_origin.trim().is_empty() {
            return Err(ValidationError::EmptyLocalOrigin);
        }

        if let Some(method) = self.allow_methods.iter().find(|m| !is_http_token(m)) {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        Self::validate_header_names("allow_headers", &self.allow_headers)?;
        if let Some(expose_headers) = &self.expose_headers {
            Self::validate_header_names("expose_headers", expose_headers)?;
        }

        Ok(())
    }

    fn validate_header_names(option: &'static str, list: &TokenList) -> Result<(), ValidationError> {
        match list.iter().find(|name| !is_http_token(name)) {
            Some(name) => Err(ValidationError::InvalidHeaderName {
                option,
                name: name.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Configuration invariants checked when a policy is constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("local_origin must not be empty")]
    EmptyLocalOrigin,
    #[error("allow_methods entry '{0}' is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("{option} entry '{name}' is not a valid HTTP header name")]
    InvalidHeaderName { option: &'static str, name: String },
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
