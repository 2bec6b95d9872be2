use today_core::QuoteState;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

pub const QUOTE_LOADING_MESSAGE: &str =
  "Loading a new quote...";

#[derive(Properties, PartialEq)]
pub struct QuoteCardProps {
  pub state: QuoteState
}

#[function_component(QuoteCard)]
pub fn quote_card(
  props: &QuoteCardProps
) -> Html {
  let quote = &props.state.quote;

  let body = if props.state.is_loading {
    html! {
        <div class="quote-loading">
            <p>{ QUOTE_LOADING_MESSAGE }</p>
        </div>
    }
  } else {
    html! {
        <>
            <p class="quote-text">{ &quote.text }</p>
            {
                if quote.has_author() {
                    html! { <p class="author">{ format!("- {}", quote.author) }</p> }
                } else {
                    html! {}
                }
            }
        </>
    }
  };

  html! {
      <div class="quote-card">
          <div class="quote-mark">
              <span>{ "❝" }</span>
          </div>
          <div class="quote-body">
              { body }
          </div>
      </div>
  }
}
