use tracing::debug;

use crate::config::MapConfig;
use crate::events::EventCollection;
use crate::markers::{
  MarkerDescriptor,
  render_markers
};
use crate::panel::{
  EventRow,
  event_rows
};
use crate::query::QueryState;
use crate::viewport::{
  Viewport,
  initial_viewport
};

/// Everything the ready page renders,
/// derived from one event collection.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
  pub events:   EventCollection,
  pub rows:     Vec<EventRow>,
  pub markers:  Vec<MarkerDescriptor>,
  pub viewport: Viewport
}

impl MapScene {
  pub fn build(
    events: EventCollection,
    cfg: &MapConfig
  ) -> Self {
    let rows = event_rows(&events);
    let markers =
      render_markers(&events, &cfg.marker);
    let viewport =
      initial_viewport(&events, &cfg.view);

    debug!(
      rows = rows.len(),
      markers = markers.len(),
      "built map scene"
    );

    Self {
      events,
      rows,
      markers,
      viewport
    }
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentView {
  Loading,
  Failed {
    message: String
  },
  Ready(MapScene)
}

impl ContentView {
  pub fn from_query(
    state: &QueryState<EventCollection>,
    cfg: &MapConfig
  ) -> Self {
    match state {
      | QueryState::Idle
      | QueryState::Loading => {
        Self::Loading
      }
      | QueryState::Error(message) => {
        Self::Failed {
          message: message.clone()
        }
      }
      | QueryState::Success(events) => {
        Self::Ready(MapScene::build(
          events.clone(),
          cfg
        ))
      }
    }
  }
}
