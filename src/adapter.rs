//! Glue between the policy engine and `http` request/response types.

use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::policy::CorsPolicy;
use crate::result::{CorsDecision, PREFLIGHT_SUCCESS_STATUS};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::request::Parts;
use http::{Request, Response, StatusCode};
use tracing::warn;

/// Owned copy of the request fields the policy reads, detached from the request
/// so the request itself can be moved downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    pub fn from_request<B>(request: &Request<B>) -> Self {
        Self::from_headers(request.method().as_str(), request.headers())
    }

    pub fn from_parts(parts: &Parts) -> Self {
        Self::from_headers(parts.method.as_str(), &parts.headers)
    }

    pub fn from_headers(method: &str, headers: &HeaderMap) -> Self {
        Self {
            method: method.to_string(),
            origin: first_value(headers, header::ORIGIN),
            access_control_request_method: first_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: joined_values(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).map(decode_latin1)
}

/// Repeated header lines are folded into one comma-separated value.
fn joined_values(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers.get_all(name).iter().map(decode_latin1).collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

/// Header bytes outside visible ASCII are read as ISO-8859-1, so every value
/// reaches the policy and none is mistaken for an absent header.
fn decode_latin1(value: &HeaderValue) -> String {
    match value.to_str() {
        Ok(text) => text.to_string(),
        Err(_) => value.as_bytes().iter().copied().map(char::from).collect(),
    }
}

fn encode_latin1(value: &str) -> Option<HeaderValue> {
    if let Ok(header_value) = HeaderValue::from_str(value) {
        return Some(header_value);
    }

    let bytes = value
        .chars()
        .map(|ch| u8::try_from(u32::from(ch)).ok())
        .collect::<Option<Vec<u8>>>()?;
    HeaderValue::from_bytes(&bytes).ok()
}

impl CorsPolicy {
    /// Runs `request` through the policy, calling `downstream` only for requests
    /// that must be forwarded. Errors from `downstream` are returned untouched.
    pub fn handle<B, R, E, F>(&self, request: Request<B>, downstream: F) -> Result<Response<R>, E>
    where
        R: Default,
        F: FnOnce(Request<B>) -> Result<Response<R>, E>,
    {
        let context = OwnedRequestContext::from_request(&request);

        match self.evaluate(&context.as_request_context()) {
            CorsDecision::NotApplicable => downstream(request),
            CorsDecision::ActualAccepted { headers } => {
                let mut response = downstream(request)?;
                apply_headers(response.headers_mut(), &headers);
                Ok(response)
            }
            decision => Ok(terminal_response(decision)),
        }
    }
}

/// Builds the engine's own response for terminal decisions. Non-terminal
/// decisions yield an empty `200`; callers forward those instead.
pub(crate) fn terminal_response<R: Default>(decision: CorsDecision) -> Response<R> {
    let (status, headers) = match decision {
        CorsDecision::Rejected(rejection) => (rejection.status, rejection.headers),
        CorsDecision::PreflightAccepted { headers } => (PREFLIGHT_SUCCESS_STATUS, headers),
        CorsDecision::NotApplicable | CorsDecision::ActualAccepted { .. } => {
            (PREFLIGHT_SUCCESS_STATUS, Headers::default())
        }
    };

    let mut response = Response::new(R::default());
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::FORBIDDEN);
    apply_headers(response.headers_mut(), &headers);
    response
}

pub(crate) fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        match (HeaderName::try_from(name.as_str()), encode_latin1(value)) {
            (Ok(header_name), Some(header_value)) => {
                map.insert(header_name, header_value);
            }
            _ => warn!(header = %name, "skipping CORS header that is not a valid HTTP header"),
        }
    }
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;
