use mapply_shared::{
  MapEventDto,
  PositionDto
};

#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
  pub index: usize,
  pub label: String
}

/// `"{lat} - {lng}"`, e.g. `"55 - 39"`.
pub fn coordinate_label(
  position: &PositionDto
) -> String {
  format!(
    "{} - {}",
    position.lat, position.lng
  )
}

pub fn event_rows(
  events: &[MapEventDto]
) -> Vec<EventRow> {
  events
    .iter()
    .enumerate()
    .map(|(index, event)| EventRow {
      index,
      label: coordinate_label(
        &event.position
      )
    })
    .collect()
}
