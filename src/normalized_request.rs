use crate::context::RequestContext;
use crate::util::lowercase_if_needed;
use std::borrow::Cow;

/// Lower-cased view of the request fields that take part in comparisons.
/// The original request stays available for values echoed back verbatim.
#[doc(hidden)]
pub struct NormalizedRequest<'a> {
    method: Cow<'a, str>,
    origin: Option<Cow<'a, str>>,
    access_control_request_method: Option<Cow<'a, str>>,
}

impl<'a> NormalizedRequest<'a> {
    #[doc(hidden)]
    pub fn new(request: &RequestContext<'a>) -> Self {
        Self {
            method: lowercase_if_needed(request.method),
            origin: request.origin.map(lowercase_if_needed),
            access_control_request_method: request
                .access_control_request_method
                .map(lowercase_if_needed),
        }
    }

    #[doc(hidden)]
    pub fn method(&self) -> &str {
        self.method.as_ref()
    }

    #[doc(hidden)]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    #[doc(hidden)]
    pub fn access_control_request_method(&self) -> Option<&str> {
        self.access_control_request_method.as_deref()
    }

    #[doc(hidden)]
    pub fn is_options(&self) -> bool {
        self.method.as_ref() == "options"
    }
}

#[cfg(test)]
#[path = "normalized_request_test.rs"]
mod normalized_request_test;
