use cors_filter::{CorsDecision, CorsRejection, Headers};

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::PreflightAccepted { headers } => headers,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_actual(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::ActualAccepted { headers } => headers,
        other => panic!("expected actual decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> CorsRejection {
    match decision {
        CorsDecision::Rejected(rejection) => rejection,
        other => panic!("expected rejection, got {:?}", other),
    }
}

pub fn assert_not_applicable(decision: CorsDecision) {
    assert!(
        matches!(decision, CorsDecision::NotApplicable),
        "expected not applicable decision, got {:?}",
        decision
    );
}
