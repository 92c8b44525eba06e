mod api;
mod app;
mod components;
mod leaflet;
mod query_client;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let config = app::load_config();
  tracing::info!(
    events_url = %config.api.events_url(),
    tiles = %config.tiles.url_template,
    popup = ?config.marker.popup,
    "starting Mapply with bundled config"
  );

  let Some(mount) = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.get_element_by_id("app")
    })
  else {
    tracing::error!(
      "missing #app mount element; \
       nothing to render"
    );
    return;
  };

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps { config }
  )
  .render();
}
