//! Decoded decline results

use crate::code::{DeclineClass, DeclineCode};
use serde::Serialize;
use std::fmt;

/// A raw processor code paired with its known decline, if any.
///
/// Built on demand from an integer; never fails. Codes outside the table
/// are kept as-is with no `known_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedDecline {
    code: i32,
    known_code: Option<DeclineCode>,
    class: Option<DeclineClass>,
}

impl DecodedDecline {
    /// Decode a raw processor code
    pub fn new(code: i32) -> Self {
        let known_code = DeclineCode::from_code(code);
        Self {
            code,
            known_code,
            class: known_code.map(DeclineCode::class),
        }
    }

    /// Raw processor code as received
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Matched decline, `None` when the code is unknown
    pub fn known_code(&self) -> Option<DeclineCode> {
        self.known_code
    }

    /// Failure class of the matched decline
    pub fn class(&self) -> Option<DeclineClass> {
        self.class
    }

    /// Whether the code is in the decline table
    pub fn is_known(&self) -> bool {
        self.known_code.is_some()
    }

    /// Symbolic name of the matched decline
    pub fn name(&self) -> Option<&'static str> {
        self.known_code.map(DeclineCode::name)
    }

    /// Emit a structured event describing this decline.
    ///
    /// Known declines log at `info` and unknown codes at `warn`, so new
    /// processor codes show up in the logs.
    pub fn report(&self) {
        match self.known_code {
            Some(known) => tracing::info!(
                code = self.code,
                category = known.name(),
                class = known.class().as_str(),
                "Payment declined by processor"
            ),
            None => tracing::warn!(code = self.code, "Unrecognized processor decline code"),
        }
    }
}

impl From<i32> for DecodedDecline {
    fn from(code: i32) -> Self {
        Self::new(code)
    }
}

impl From<DeclineCode> for DecodedDecline {
    fn from(known: DeclineCode) -> Self {
        Self::new(known.code())
    }
}

impl fmt::Display for DecodedDecline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_code {
            Some(known) => write!(f, "{} ({})", self.code, known.name()),
            None => write!(f, "{} (unknown)", self.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[test]
    fn test_known_code() {
        let decoded = DecodedDecline::new(2000);
        assert_eq!(decoded.code(), 2000);
        assert_eq!(decoded.known_code(), Some(DeclineCode::DoNotHonor));
        assert_eq!(decoded.class(), Some(DeclineClass::ProcessorDeclined));
        assert_eq!(decoded.name(), Some("DO_NOT_HONOR"));
        assert!(decoded.is_known());
    }

    #[test]
    fn test_unknown_code() {
        for code in [-5, -1, 0, 1000, 2109, 9999, 99999, i32::MIN, i32::MAX] {
            let decoded = DecodedDecline::new(code);
            assert_eq!(decoded.code(), code);
            assert_eq!(decoded.known_code(), None);
            assert_eq!(decoded.class(), None);
            assert_eq!(decoded.name(), None);
            assert!(!decoded.is_known());
        }
    }

    #[test]
    fn test_network_unavailable() {
        let decoded = DecodedDecline::from(3000);
        assert_eq!(
            decoded.known_code(),
            Some(DeclineCode::ProcessorNetworkUnavailableTryAgain)
        );
        assert_eq!(decoded.class(), Some(DeclineClass::ProcessorUnavailable));
    }

    #[test]
    fn test_from_decline_code() {
        let decoded = DecodedDecline::from(DeclineCode::ClosedCard);
        assert_eq!(decoded, DecodedDecline::new(2108));
    }

    #[test]
    fn test_display() {
        assert_eq!(DecodedDecline::new(2108).to_string(), "2108 (CLOSED_CARD)");
        assert_eq!(DecodedDecline::new(9999).to_string(), "9999 (unknown)");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(DecodedDecline::new(2001)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": 2001,
                "known_code": "INSUFFICIENT_FUNDS",
                "class": "processor_declined",
            })
        );

        let json = serde_json::to_value(DecodedDecline::new(-5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": -5, "known_code": null, "class": null })
        );
    }

    #[derive(Debug)]
    struct CapturedEvent {
        level: tracing::Level,
        fields: BTreeMap<String, String>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    struct FieldRecorder<'a>(&'a mut BTreeMap<String, String>);

    impl Visit for FieldRecorder<'_> {
        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = BTreeMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            self.events.lock().unwrap().push(CapturedEvent {
                level: *event.metadata().level(),
                fields,
            });
        }
    }

    fn capture_report(code: i32) -> Vec<CapturedEvent> {
        let layer = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());

        tracing::subscriber::with_default(subscriber, || DecodedDecline::new(code).report());

        std::mem::take(&mut *layer.events.lock().unwrap())
    }

    #[test]
    fn test_report_known_code() {
        let events = capture_report(3000);
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.level, tracing::Level::INFO);
        assert_eq!(event.fields.get("code").map(String::as_str), Some("3000"));
        assert_eq!(
            event.fields.get("category").map(String::as_str),
            Some("PROCESSOR_NETWORK_UNAVAILABLE_TRY_AGAIN")
        );
        assert_eq!(
            event.fields.get("class").map(String::as_str),
            Some("processor_unavailable")
        );
    }

    #[test]
    fn test_report_unknown_code() {
        let events = capture_report(-5);
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.level, tracing::Level::WARN);
        assert_eq!(event.fields.get("code").map(String::as_str), Some("-5"));
        assert!(!event.fields.contains_key("category"));
        assert!(!event.fields.contains_key("class"));
    }
}
