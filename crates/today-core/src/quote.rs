use serde::Deserialize;
use tracing::{debug, error};

use crate::cancel::CancelToken;

pub const PLACEHOLDER_TEXT: &str = "Loading quote...";
pub const FALLBACK_TEXT: &str = "Couldn't get a quote right now. Will try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_TEXT, "")
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_TEXT, "")
    }

    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("no quote api key configured")]
    MissingApiKey,

    #[error("quote request failed: {0}")]
    Network(String),

    #[error("quote service returned status {0}")]
    Status(u16),

    #[error("quote response was not understood: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("quote service returned no quotes")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct QuoteRecord {
    quote: String,
    #[serde(default)]
    author: Option<String>,
}

/// Interprets a quote service reply.
///
/// Any status outside 200..=299 is a failure regardless of body. A success
/// body must be a JSON array; its first element supplies the quote. A
/// missing or null author becomes an empty one.
pub fn parse_quote_response(status: u16, body: &str) -> Result<Quote, QuoteError> {
    if !(200..=299).contains(&status) {
        return Err(QuoteError::Status(status));
    }

    let records: Vec<QuoteRecord> = serde_json::from_str(body)?;
    let first = records
        .into_iter()
        .next()
        .ok_or(QuoteError::EmptyResponse)?;

    Ok(Quote::new(first.quote, first.author.unwrap_or_default()))
}

#[derive(Debug)]
pub enum QuoteEvent {
    FetchStarted,
    Fetched(Quote),
    Failed(QuoteError),
}

impl QuoteEvent {
    pub fn from_outcome(outcome: Result<Quote, QuoteError>) -> Self {
        match outcome {
            Ok(quote) => Self::Fetched(quote),
            Err(error) => Self::Failed(error),
        }
    }
}

/// Loading flag plus the quote currently on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteState {
    pub is_loading: bool,
    pub quote: Quote,
}

impl Default for QuoteState {
    fn default() -> Self {
        Self {
            is_loading: false,
            quote: Quote::placeholder(),
        }
    }
}

impl QuoteState {
    pub fn apply(&self, event: QuoteEvent) -> Self {
        match event {
            QuoteEvent::FetchStarted => Self {
                is_loading: true,
                quote: self.quote.clone(),
            },
            QuoteEvent::Fetched(quote) => {
                debug!(author = %quote.author, "quote updated");
                Self {
                    is_loading: false,
                    quote,
                }
            }
            QuoteEvent::Failed(error) => {
                error!(%error, "error getting quote");
                Self {
                    is_loading: false,
                    quote: Quote::fallback(),
                }
            }
        }
    }

    /// Applies `event` unless `token` was cancelled, in which case the
    /// current state is kept and `None` is returned.
    pub fn apply_unless_cancelled(&self, event: QuoteEvent, token: &CancelToken) -> Option<Self> {
        if token.is_cancelled() {
            debug!(?event, "discarding quote event after teardown");
            return None;
        }
        Some(self.apply(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_uses_first_record() {
        let quote = parse_quote_response(
            200,
            r#"[{"quote":"Keep going.","author":"Anon","category":"inspirational"},
                {"quote":"Second","author":"B"}]"#,
        )
        .expect("quote");

        assert_eq!(quote, Quote::new("Keep going.", "Anon"));
    }

    #[test]
    fn null_or_missing_author_keeps_the_quote() {
        let quote = parse_quote_response(200, r#"[{"quote":"Hi","author":null}]"#)
            .expect("null author");
        assert_eq!(quote, Quote::new("Hi", ""));
        assert!(!quote.has_author());

        let quote = parse_quote_response(200, r#"[{"quote":"Hey"}]"#).expect("missing author");
        assert_eq!(quote, Quote::new("Hey", ""));
    }

    #[test]
    fn any_non_empty_author_is_shown() {
        assert!(Quote::new("x", "Anon").has_author());
        assert!(Quote::new("x", " ").has_author());
        assert!(!Quote::new("x", "").has_author());
    }

    #[test]
    fn non_success_status_fails_even_with_body() {
        let result = parse_quote_response(502, r#"[{"quote":"x","author":"y"}]"#);
        assert!(matches!(result, Err(QuoteError::Status(502))));
    }

    #[test]
    fn empty_and_malformed_bodies_fail() {
        assert!(matches!(
            parse_quote_response(200, "[]"),
            Err(QuoteError::EmptyResponse)
        ));
        assert!(matches!(
            parse_quote_response(200, r#"{"quote":"not an array"}"#),
            Err(QuoteError::Decode(_))
        ));
    }

    #[test]
    fn loading_keeps_previous_quote() {
        let settled =
            QuoteState::default().apply(QuoteEvent::Fetched(Quote::new("Be kind.", "Someone")));
        let loading = settled.apply(QuoteEvent::FetchStarted);

        assert!(loading.is_loading);
        assert_eq!(loading.quote, settled.quote);
    }

    #[test]
    fn failure_settles_to_fallback() {
        let state = QuoteState::default()
            .apply(QuoteEvent::FetchStarted)
            .apply(QuoteEvent::Failed(QuoteError::Network("offline".to_string())));

        assert!(!state.is_loading);
        assert_eq!(state.quote, Quote::fallback());
        assert!(!state.quote.has_author());
    }

    #[test]
    fn cancelled_token_discards_events() {
        let token = CancelToken::new();
        let state = QuoteState::default().apply(QuoteEvent::FetchStarted);
        token.cancel();

        let next = state.apply_unless_cancelled(
            QuoteEvent::Fetched(Quote::new("late", "nobody")),
            &token,
        );
        assert!(next.is_none());
    }
}
