use today_core::quote::{FALLBACK_TEXT, parse_quote_response};
use today_core::{CancelToken, Quote, QuoteEvent, QuoteState};

fn settle(state: &QuoteState, status: u16, body: &str) -> QuoteState {
    state
        .apply(QuoteEvent::FetchStarted)
        .apply(QuoteEvent::from_outcome(parse_quote_response(status, body)))
}

#[test]
fn initial_state_shows_placeholder() {
    let state = QuoteState::default();
    assert!(!state.is_loading);
    assert_eq!(state.quote.text, "Loading quote...");
    assert_eq!(state.quote.author, "");
}

#[test]
fn non_success_status_settles_to_fallback() {
    let state = settle(&QuoteState::default(), 503, "Service Unavailable");

    assert!(!state.is_loading);
    assert_eq!(
        state.quote,
        Quote::new(
            "Couldn't get a quote right now. Will try again later.",
            ""
        )
    );
    assert_eq!(state.quote.text, FALLBACK_TEXT);
}

#[test]
fn success_settles_to_first_quote() {
    let state = settle(
        &QuoteState::default(),
        200,
        r#"[{"quote":"Keep going.","author":"Anon"}]"#,
    );

    assert!(!state.is_loading);
    assert_eq!(state.quote, Quote::new("Keep going.", "Anon"));
}

#[test]
fn refresh_after_failure_recovers() {
    let failed = settle(&QuoteState::default(), 500, "");
    let recovered = settle(&failed, 200, r#"[{"quote":"Again.","author":"Me"}]"#);

    assert_eq!(recovered.quote, Quote::new("Again.", "Me"));
}

#[test]
fn response_after_teardown_is_discarded() {
    let token = CancelToken::new();
    let loading = QuoteState::default().apply(QuoteEvent::FetchStarted);

    token.cancel();
    let outcome = parse_quote_response(200, r#"[{"quote":"Late","author":"X"}]"#);

    assert!(
        loading
            .apply_unless_cancelled(QuoteEvent::from_outcome(outcome), &token)
            .is_none()
    );
}
