use std::rc::Rc;

use mapply_core::config::MapConfig;
use mapply_core::content::ContentView;
use mapply_core::markers::MarkerIcon;
use mapply_core::shell::{
  ERROR_TEXT,
  LOADING_TEXT
};
use yew::{
  Html,
  function_component,
  html,
  use_context
};

use super::{
  ControlPanel,
  MapView,
  StatusBanner
};
use crate::query_client::use_map_events;

#[function_component(Content)]
pub fn content() -> Html {
  let config = use_context::<Rc<MapConfig>>()
    .unwrap_or_default();
  let state =
    use_map_events(config.api.events_url());

  match ContentView::from_query(
    &state, &config
  ) {
    | ContentView::Loading => html! {
        <StatusBanner text={LOADING_TEXT} />
    },
    | ContentView::Failed {
      message
    } => html! {
        <StatusBanner text={ERROR_TEXT} detail={Some(message)} />
    },
    | ContentView::Ready(scene) => html! {
        <main class="content">
            <ControlPanel rows={scene.rows} />
            <MapView
                markers={scene.markers}
                viewport={scene.viewport}
                tiles={config.tiles.clone()}
                staged_icon={MarkerIcon::from_config(&config.marker)}
            />
        </main>
    }
  }
}
