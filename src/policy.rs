use crate::config::{ConfigError, CorsConfig};
use crate::constants::{PREFLIGHT_MAX_AGE, header};
use crate::context::RequestContext;
use crate::headers::{HeaderCollection, Headers};
use crate::normalized_request::NormalizedRequest;
use crate::options::{CorsOptions, ValidationError};
use crate::result::{CorsDecision, CorsRejection, RejectionReason};
use crate::util::{lowercase_if_needed, normalize_lower, split_lowercase};
use tracing::{debug, trace};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// The policy is immutable once built, so one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    options: CorsOptions,
    allow_methods_value: String,
    allow_headers_value: String,
    expose_headers_value: String,
    max_age_value: String,
}

impl CorsPolicy {
    /// Builds a policy after trimming `local_origin` and validating `options`.
    ///
    /// This is stricter than the string configuration: an empty local origin,
    /// or a method or header name that is not an HTTP token, is refused.
    pub fn new(mut options: CorsOptions) -> Result<Self, ValidationError> {
        options.local_origin = normalize_lower(options.local_origin.trim());
        options.validate()?;

        Ok(Self {
            allow_methods_value: options.allow_methods.header_value(),
            allow_headers_value: options.allow_headers.header_value(),
            expose_headers_value: options.exposed_headers().header_value(),
            max_age_value: PREFLIGHT_MAX_AGE.to_string(),
            options,
        })
    }

    pub fn from_config(config: CorsConfig) -> Result<Self, ConfigError> {
        let options = config.into_options()?;
        Ok(Self::new(options)?)
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// A request is a CORS request when it carries an `Origin` that differs
    /// from the local origin, ignoring case.
    pub fn is_cors_request(&self, request: &RequestContext<'_>) -> bool {
        request
            .origin
            .is_some_and(|origin| lowercase_if_needed(origin) != self.options.local_origin)
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.is_cors_request(request) {
            trace!(method = request.method, "not a CORS request");
            return CorsDecision::NotApplicable;
        }

        let normalized = NormalizedRequest::new(request);
        let (Some(origin), Some(normalized_origin)) = (request.origin, normalized.origin()) else {
            return CorsDecision::NotApplicable;
        };

        if !self.options.allow_origins.allows(normalized_origin) {
            debug!(origin, "origin not authorized");
            return Self::reject(
                RejectionReason::OriginNotAllowed {
                    origin: origin.to_string(),
                },
                Headers::default(),
            );
        }

        // OPTIONS is always let through so preflight requests can be answered.
        let method = normalized.method();
        if !normalized.is_options() && !self.options.allow_methods.contains(method) {
            debug!(method, "method not authorized");
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            return Self::reject(
                RejectionReason::MethodNotAllowed {
                    method: method.to_string(),
                },
                headers.into_headers(),
            );
        }

        if normalized.is_options() {
            self.evaluate_preflight(request, &normalized, origin)
        } else {
            self.evaluate_actual(origin)
        }
    }

    fn evaluate_preflight(
        &self,
        request: &RequestContext<'_>,
        normalized: &NormalizedRequest<'_>,
        origin: &str,
    ) -> CorsDecision {
        let Some(requested_method) = normalized.access_control_request_method() else {
            debug!("no Access-Control-Request-Method header");
            return Self::reject(RejectionReason::MissingRequestMethod, Headers::default());
        };

        if !self.options.allow_methods.contains(requested_method) {
            debug!(
                requested_method,
                "method in Access-Control-Request-Method not authorized"
            );
            return Self::reject(
                RejectionReason::RequestMethodNotAllowed {
                    requested_method: requested_method.to_string(),
                },
                Headers::default(),
            );
        }

        if let Some(requested_headers) = request.access_control_request_headers
            && let Some(denied) = split_lowercase(requested_headers)
                .find(|name| !self.options.allow_headers.contains(name))
        {
            debug!(requested_header = %denied, "header not authorized");
            return Self::reject(
                RejectionReason::RequestHeaderNotAllowed {
                    requested_header: denied.into_owned(),
                },
                Headers::default(),
            );
        }

        let mut headers = HeaderCollection::with_estimate(4);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.allow_methods_value.as_str(),
        );
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.allow_headers_value.as_str(),
        );
        headers.push(header::ACCESS_CONTROL_MAX_AGE, self.max_age_value.as_str());

        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
        }
    }

    fn evaluate_actual(&self, origin: &str) -> CorsDecision {
        let mut headers = HeaderCollection::with_estimate(2);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.push(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.expose_headers_value.as_str(),
        );

        CorsDecision::ActualAccepted {
            headers: headers.into_headers(),
        }
    }

    fn reject(reason: RejectionReason, headers: Headers) -> CorsDecision {
        CorsDecision::Rejected(CorsRejection::new(reason, headers))
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
