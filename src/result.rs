use crate::headers::Headers;

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Not a CORS request: forward untouched and leave the response alone.
    NotApplicable,
    /// Terminal response; never forwarded downstream.
    Rejected(CorsRejection),
    /// Terminal `200` preflight response carrying these headers.
    PreflightAccepted { headers: Headers },
    /// Forward downstream, then add these headers to the response.
    ActualAccepted { headers: Headers },
}

impl CorsDecision {
    /// Status the engine answers with itself, if the request stops here.
    pub fn terminal_status(&self) -> Option<u16> {
        match self {
            Self::Rejected(rejection) => Some(rejection.status),
            Self::PreflightAccepted { .. } => Some(PREFLIGHT_SUCCESS_STATUS),
            Self::NotApplicable | Self::ActualAccepted { .. } => None,
        }
    }
}

pub(crate) const PREFLIGHT_SUCCESS_STATUS: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsRejection {
    pub status: u16,
    pub headers: Headers,
    pub reason: RejectionReason,
}

impl CorsRejection {
    pub(crate) fn new(reason: RejectionReason, headers: Headers) -> Self {
        Self {
            status: reason.status(),
            headers,
            reason,
        }
    }
}

/// Why a CORS request was refused. Kept for diagnostics; responses do not carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    OriginNotAllowed { origin: String },
    MethodNotAllowed { method: String },
    MissingRequestMethod,
    RequestMethodNotAllowed { requested_method: String },
    RequestHeaderNotAllowed { requested_header: String },
}

impl RejectionReason {
    pub fn status(&self) -> u16 {
        match self {
            Self::MethodNotAllowed { .. } => 405,
            Self::OriginNotAllowed { .. }
            | Self::MissingRequestMethod
            | Self::RequestMethodNotAllowed { .. }
            | Self::RequestHeaderNotAllowed { .. } => 403,
        }
    }
}
