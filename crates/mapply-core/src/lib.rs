pub mod config;
pub mod content;
pub mod events;
pub mod markers;
pub mod panel;
pub mod query;
pub mod shell;
pub mod staging;
pub mod viewport;

pub use config::{
  MapConfig,
  PopupMode
};
pub use content::{
  ContentView,
  MapScene
};
pub use events::{
  EventCollection,
  collect_events
};
pub use query::{
  FetchTicket,
  MAP_EVENTS_QUERY,
  QueryCache,
  QueryState
};
pub use staging::{
  StagedMarker,
  StagingArea
};
