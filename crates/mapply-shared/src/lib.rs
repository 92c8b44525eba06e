use serde::{
  Deserialize,
  Serialize
};

/// Collection path for map events on the
/// API server.
pub const MAP_EVENTS_PATH: &str =
  "/api/v1/map/events";

pub const CLIENT_ROOT_PATH: &str = "/";
pub const CLIENT_LOGIN_PATH: &str =
  "/login";
pub const CLIENT_SIGNUP_PATH: &str =
  "/signup";

/// Path of a single map event, e.g.
/// `/api/v1/map/events/1`.
pub fn map_event_path(id: i64) -> String {
  format!("{MAP_EVENTS_PATH}/{id}")
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct PositionDto {
  pub lat: f64,
  pub lng: f64
}

impl PositionDto {
  pub fn new(
    lat: f64,
    lng: f64
  ) -> Self {
    Self {
      lat,
      lng
    }
  }

  /// True when both coordinates are
  /// finite and inside the WGS84 range.
  /// Nothing is rejected on this basis;
  /// it only feeds diagnostics.
  pub fn is_in_range(&self) -> bool {
    self.lat.is_finite()
      && self.lng.is_finite()
      && (-90.0..=90.0).contains(&self.lat)
      && (-180.0..=180.0)
        .contains(&self.lng)
  }

  /// `[lat, lng]`, the tuple form Leaflet
  /// accepts wherever a `LatLng` is
  /// expected.
  pub fn as_pair(&self) -> [f64; 2] {
    [self.lat, self.lng]
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct MapEventDto {
  #[serde(default)]
  pub id:          Option<i64>,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String,
  pub position:    PositionDto
}

/// Response body of `GET
/// /api/v1/map/events`. Older servers
/// answer with a bare array, newer ones
/// wrap it in `{ "events": [...] }`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(untagged)]
pub enum MapEventsPayload {
  List(Vec<MapEventDto>),
  Envelope {
    events: Vec<MapEventDto>
  }
}

impl MapEventsPayload {
  pub fn into_events(
    self
  ) -> Vec<MapEventDto> {
    match self {
      | Self::List(events) => events,
      | Self::Envelope {
        events
      } => events
    }
  }

  pub fn len(&self) -> usize {
    match self {
      | Self::List(events) => {
        events.len()
      }
      | Self::Envelope {
        events
      } => events.len()
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_array_and_envelope_decode_to_same_events()
   {
    let list = r#"[
      {"id": 1, "title": "A", "description": "first", "position": {"lat": 55.0, "lng": 39.0}},
      {"id": 2, "title": "B", "description": "second", "position": {"lat": 58.0, "lng": 38.0}}
    ]"#;
    let envelope = format!(
      r#"{{"events": {list}}}"#
    );

    let from_list: MapEventsPayload =
      serde_json::from_str(list)
        .expect("decode list");
    let from_envelope: MapEventsPayload =
      serde_json::from_str(&envelope)
        .expect("decode envelope");

    assert!(matches!(
      from_list,
      MapEventsPayload::List(_)
    ));
    assert!(matches!(
      from_envelope,
      MapEventsPayload::Envelope { .. }
    ));
    assert_eq!(
      from_list.into_events(),
      from_envelope.into_events()
    );
  }

  #[test]
  fn missing_title_description_and_id_default()
   {
    let raw = r#"[{"position": {"lat": 1.5, "lng": -2.25}}]"#;
    let events = serde_json::from_str::<
      MapEventsPayload,
    >(raw)
    .expect("decode")
    .into_events();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, None);
    assert!(events[0].title.is_empty());
    assert!(
      events[0].description.is_empty()
    );
    assert_eq!(
      events[0].position,
      PositionDto::new(1.5, -2.25)
    );
  }

  #[test]
  fn record_without_position_is_rejected()
  {
    let raw = r#"[{"title": "no position"}]"#;
    assert!(
      serde_json::from_str::<
        MapEventsPayload,
      >(raw)
      .is_err()
    );
  }

  #[test]
  fn empty_payloads_are_valid() {
    let list: MapEventsPayload =
      serde_json::from_str("[]")
        .expect("decode list");
    let envelope: MapEventsPayload =
      serde_json::from_str(
        r#"{"events": []}"#
      )
      .expect("decode envelope");
    assert!(list.is_empty());
    assert!(envelope.is_empty());
  }

  #[test]
  fn range_check_flags_out_of_bounds_coordinates()
   {
    assert!(
      PositionDto::new(55.0, 39.0)
        .is_in_range()
    );
    assert!(
      PositionDto::new(-90.0, 180.0)
        .is_in_range()
    );
    assert!(
      !PositionDto::new(91.0, 0.0)
        .is_in_range()
    );
    assert!(
      !PositionDto::new(0.0, -180.5)
        .is_in_range()
    );
    assert!(
      !PositionDto::new(f64::NAN, 0.0)
        .is_in_range()
    );
  }

  #[test]
  fn single_event_path_appends_id() {
    assert_eq!(
      map_event_path(7),
      "/api/v1/map/events/7"
    );
  }
}
