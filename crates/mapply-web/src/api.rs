use gloo::net::http::Request;
use mapply_shared::MapEventsPayload;

pub async fn fetch_map_events(
  url: &str
) -> Result<MapEventsPayload, String> {
  tracing::debug!(url, "fetching map events");

  let response = Request::get(url)
    .send()
    .await
    .map_err(|e| format!("request error: {e}"))?;

  let body = if response.ok() {
    response
      .text()
      .await
      .map_err(|e| format!("read error: {e}"))?
  } else {
    String::new()
  };

  let payload = decode_events(
    response.ok(),
    response.status(),
    &response.status_text(),
    &body
  )?;

  tracing::debug!(
    count = payload.len(),
    "decoded map events"
  );
  Ok(payload)
}

/// Turns a finished response into events.
/// Non-2xx statuses win over the body.
fn decode_events(
  ok: bool,
  status: u16,
  status_text: &str,
  body: &str
) -> Result<MapEventsPayload, String> {
  if !ok {
    return Err(format!(
      "unexpected status {status} \
       {status_text}"
    ));
  }

  serde_json::from_str::<MapEventsPayload>(
    body
  )
  .map_err(|e| format!("decode error: {e}"))
}
