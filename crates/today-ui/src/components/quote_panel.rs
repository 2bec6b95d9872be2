use std::rc::Rc;

use gloo::timers::callback::Interval;
use today_core::config::QuoteConfig;
use today_core::{
  CancelToken,
  QuoteEvent
};
use yew::{
  Html,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_reducer
};

use super::QuoteCard;
use crate::api::fetch_quote;
use crate::app::{
  QuoteAction,
  QuoteModel
};

#[derive(Properties, PartialEq)]
pub struct QuotePanelProps {
  pub config: QuoteConfig
}

/// Fetches a quote on mount and again on every refresh tick. Teardown
/// stops the timer and cancels the token so late responses are dropped.
#[function_component(QuotePanel)]
pub fn quote_panel(
  props: &QuotePanelProps
) -> Html {
  let quote =
    use_reducer(QuoteModel::default);

  {
    let dispatcher = quote.dispatcher();
    use_effect_with(
      props.config.clone(),
      move |config| {
        let token = CancelToken::new();

        let refresh = {
          let config = config.clone();
          let token = token.clone();
          Rc::new(move || {
            dispatcher.dispatch(
              QuoteAction {
                event: QuoteEvent::FetchStarted,
                token: token.clone()
              }
            );

            let config = config.clone();
            let token = token.clone();
            let dispatcher =
              dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
              let outcome =
                fetch_quote(&config).await;
              dispatcher.dispatch(
                QuoteAction {
                  event: QuoteEvent::from_outcome(outcome),
                  token
                }
              );
            });
          })
        };

        refresh();

        let period_ms =
          config.refresh_millis();
        tracing::info!(
          period_ms,
          "quote refresh timer started"
        );
        let interval = Interval::new(
          period_ms,
          {
            let refresh = refresh.clone();
            move || refresh()
          }
        );

        move || {
          token.cancel();
          drop(interval);
          tracing::info!(
            "quote timer stopped"
          );
        }
      }
    );
  }

  html! {
      <QuoteCard state={quote.0.clone()} />
  }
}
