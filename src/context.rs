/// Request fields the policy engine reads. Header lookups are resolved by the
/// caller; `None` means the header was absent.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            origin: None,
            access_control_request_method: None,
            access_control_request_headers: None,
        }
    }

    pub fn with_origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_request_method(mut self, method: &'a str) -> Self {
        self.access_control_request_method = Some(method);
        self
    }

    pub fn with_request_headers(mut self, headers: &'a str) -> Self {
        self.access_control_request_headers = Some(headers);
        self
    }
}
