use gloo::net::http::Request;
use today_core::config::QuoteConfig;
use today_core::quote::parse_quote_response;
use today_core::{
  Quote,
  QuoteError
};

/// Path, relative to the serving origin, of the deployment-supplied
/// configuration layer.
pub const RUNTIME_CONFIG_PATH: &str =
  "today.toml";

pub async fn fetch_quote(
  config: &QuoteConfig
) -> Result<Quote, QuoteError> {
  let Some(api_key) =
    config.api_key.as_deref()
  else {
    return Err(
      QuoteError::MissingApiKey
    );
  };

  let response =
    Request::get(&config.endpoint)
      .header(
        &config.api_key_header,
        api_key
      )
      .send()
      .await
      .map_err(|e| {
        QuoteError::Network(
          e.to_string()
        )
      })?;

  let status = response.status();
  if !response.ok() {
    return parse_quote_response(
      status, ""
    );
  }

  let body =
    response.text().await.map_err(
      |e| {
        QuoteError::Network(
          e.to_string()
        )
      }
    )?;

  parse_quote_response(status, &body)
}

/// Fetches the runtime configuration layer. A missing file is normal and
/// yields `None`.
pub async fn fetch_runtime_config()
-> Option<String> {
  let response =
    match Request::get(
      RUNTIME_CONFIG_PATH
    )
    .send()
    .await
    {
      | Ok(response) => response,
      | Err(error) => {
        tracing::warn!(
          %error,
          path = RUNTIME_CONFIG_PATH,
          "runtime configuration \
           request failed"
        );
        return None;
      }
    };

  if !response.ok() {
    tracing::debug!(
      status = response.status(),
      path = RUNTIME_CONFIG_PATH,
      "no runtime configuration served"
    );
    return None;
  }

  match response.text().await {
    | Ok(text) => Some(text),
    | Err(error) => {
      tracing::warn!(
        %error,
        "failed reading runtime \
         configuration"
      );
      None
    }
  }
}
