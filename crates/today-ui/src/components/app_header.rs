use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
  pub title:   String,
  pub tagline: String
}

#[function_component(AppHeader)]
pub fn app_header(
  props: &AppHeaderProps
) -> Html {
  html! {
      <div class="card-header">
          <h1 class="title">{ &props.title }</h1>
          <p class="tagline">{ &props.tagline }</p>
      </div>
  }
}
