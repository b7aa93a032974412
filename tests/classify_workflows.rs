//! Integration tests for common decline classification workflows.
//!
//! These tests go through the facade crate the way an application would.

use declinekit::prelude::*;
use declinekit::ParseDeclineCodeError;

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_documented_scenarios() {
    assert_eq!(classify(2000).known_code(), Some(DeclineCode::DoNotHonor));
    assert_eq!(classify(2108).known_code(), Some(DeclineCode::ClosedCard));
    assert_eq!(
        classify(3000).known_code(),
        Some(DeclineCode::ProcessorNetworkUnavailableTryAgain)
    );
    assert_eq!(classify(9999).known_code(), None);
    assert_eq!(classify(-5).known_code(), None);
}

#[test]
fn test_unknown_codes_keep_raw_value() {
    for code in [-1, 0, 1999, 2109, 2999, 3001, 99999] {
        let decoded = classify(code);
        assert_eq!(decoded.code(), code);
        assert!(!decoded.is_known());
        assert_eq!(decoded.to_string(), format!("{code} (unknown)"));
    }
}

#[test]
fn test_dense_range_is_fully_known() {
    for code in 2000..=2108 {
        let decoded = classify(code);
        assert!(decoded.is_known(), "code {code} should be known");
        assert_eq!(decoded.class(), Some(DeclineClass::ProcessorDeclined));
    }
}

#[test]
fn test_classifier_matches_free_function() {
    let classifier = DeclineCodeClassifier::new();
    for code in 1990..=3010 {
        assert_eq!(classifier.classify(code), classify(code));
    }
}

// =============================================================================
// Consumer patterns
// =============================================================================

#[test]
fn test_pattern_match_for_user_copy() {
    fn copy_for(code: i32) -> &'static str {
        match classify(code).known_code() {
            Some(DeclineCode::InsufficientFunds) => "insufficient_funds",
            Some(DeclineCode::ExpiredCard) => "expired",
            Some(known) if known.class() == DeclineClass::ProcessorUnavailable => "try_again",
            Some(_) => "declined",
            None => "generic",
        }
    }

    assert_eq!(copy_for(2001), "insufficient_funds");
    assert_eq!(copy_for(2004), "expired");
    assert_eq!(copy_for(3000), "try_again");
    assert_eq!(copy_for(2046), "declined");
    assert_eq!(copy_for(12), "generic");
}

#[test]
fn test_analytics_payload() {
    let payload = serde_json::to_value(classify(2010)).unwrap();
    assert_eq!(payload["code"], 2010);
    assert_eq!(payload["known_code"], "CARD_ISSUER_DECLINED_CVV");
    assert_eq!(payload["class"], "processor_declined");
}

#[test]
fn test_tag_round_trip() {
    let tag = classify(2053).known_code().unwrap().to_string();
    assert_eq!(tag, "CARD_REPORTED_AS_LOST_OR_STOLEN");

    let parsed: DeclineCode = tag.parse().unwrap();
    assert_eq!(parsed.code(), 2053);

    assert!(matches!(
        "SOMETHING_ELSE".parse::<DeclineCode>(),
        Err(ParseDeclineCodeError::UnknownName(_))
    ));
}
