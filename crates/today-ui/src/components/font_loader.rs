use web_sys::Element;
use yew::{
  Html,
  Properties,
  function_component,
  html,
  use_effect_with
};

/// A `<link rel="stylesheet">` appended to the document head. Dropping it
/// removes exactly that element.
struct StylesheetLink {
  element: Element
}

impl StylesheetLink {
  fn attach(
    href: &str
  ) -> Result<Self, String> {
    let document = web_sys::window()
      .and_then(|window| {
        window.document()
      })
      .ok_or("no document")?;
    let head = document
      .head()
      .ok_or("document has no head")?;

    let element = document
      .create_element("link")
      .map_err(|e| {
        format!(
          "create link failed: {e:?}"
        )
      })?;
    element
      .set_attribute("rel", "stylesheet")
      .map_err(|e| {
        format!("set rel failed: {e:?}")
      })?;
    element
      .set_attribute("href", href)
      .map_err(|e| {
        format!("set href failed: {e:?}")
      })?;
    head.append_child(&element).map_err(
      |e| {
        format!(
          "append link failed: {e:?}"
        )
      }
    )?;

    Ok(Self { element })
  }
}

impl Drop for StylesheetLink {
  fn drop(&mut self) {
    self.element.remove();
    tracing::info!("font link removed");
  }
}

#[derive(Properties, PartialEq)]
pub struct FontLoaderProps {
  pub href: String
}

#[function_component(FontLoader)]
pub fn font_loader(
  props: &FontLoaderProps
) -> Html {
  use_effect_with(
    props.href.clone(),
    move |href| {
      tracing::info!(
        href = %href,
        "loading fonts"
      );
      let link =
        match StylesheetLink::attach(href)
        {
          | Ok(link) => Some(link),
          | Err(error) => {
            tracing::error!(
              %error,
              "failed attaching font \
               stylesheet"
            );
            None
          }
        };

      move || drop(link)
    }
  );

  html! {}
}
