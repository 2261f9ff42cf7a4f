use claims_augment::{augment, ClaimSet, ParamMap, ParameterError, ParameterSource};

/// A request handle whose underlying request is gone; every read fails.
struct PoisonedRequest;

impl ParameterSource for PoisonedRequest {
    fn parameter(&self, name: &str) -> Result<Option<String>, ParameterError> {
        Err(ParameterError::new(format!(
            "read of '{}' failed: connection reset",
            name
        )))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn issuer_claims() -> ClaimSet {
    ClaimSet::builder()
        .claim("sub", "alice")
        .claim("aud", "orders-api")
        .claim("exp", 1735689600u64)
        .build()
}

#[test]
fn issuance_flow_adds_context_claims() {
    init_tracing();

    let token_request = ParamMap::from_query("clientChannel=mobile&clientVersion=2.4.1");
    let claims = augment(issuer_claims(), Some(&token_request), None);

    assert_eq!(claims.get_str("sub"), Some("alice"));
    assert_eq!(claims.get_str("aud"), Some("orders-api"));
    assert_eq!(claims.get_str("clientChannel"), Some("mobile"));
    assert_eq!(claims.get_str("clientVersion"), Some("2.4.1"));

    // The result is a valid JWT-style payload
    let payload = serde_json::to_value(&claims).unwrap();
    assert!(payload.is_object());
}

#[test]
fn no_request_context_is_identity() {
    init_tracing();

    let base = issuer_claims();
    let claims = augment(base.clone(), None, None);

    assert_eq!(claims, base);
}

#[test]
fn poisoned_request_still_issues_base_claims() {
    init_tracing();

    let base = issuer_claims();
    let claims = augment(base.clone(), Some(&PoisonedRequest), None);

    // The failure is observable only via logging; the caller always gets
    // a usable claim set.
    assert_eq!(claims, base);
}

#[test]
fn unrecognized_parameters_are_never_promoted() {
    let token_request = ParamMap::from_query("scope=admin&clientChannel=web&role=root");
    let claims = augment(issuer_claims(), Some(&token_request), None);

    assert_eq!(claims.get_str("clientChannel"), Some("web"));
    assert!(!claims.contains("scope"));
    assert!(!claims.contains("role"));
}

#[test]
fn caller_supplied_parameter_source_works() {
    // A caller can adapt its own request type to the boundary trait.
    struct FrameworkRequest {
        query: String,
    }

    impl ParameterSource for FrameworkRequest {
        fn parameter(&self, name: &str) -> Result<Option<String>, ParameterError> {
            ParamMap::from_query(&self.query).parameter(name)
        }
    }

    let request = FrameworkRequest {
        query: "clientVersion=3.0.0".to_string(),
    };
    let claims = augment(issuer_claims(), Some(&request), None);

    assert_eq!(claims.get_str("clientVersion"), Some("3.0.0"));
    assert!(!claims.contains("clientChannel"));
}
