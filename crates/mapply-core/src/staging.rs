use mapply_shared::PositionDto;
use tracing::debug;
use uuid::Uuid;

use crate::markers::{
  MarkerDescriptor,
  MarkerIcon
};

/// Unsaved marker placed by clicking the
/// map. Never sent anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedMarker {
  pub id:       Uuid,
  pub position: PositionDto
}

impl StagedMarker {
  pub fn at(position: PositionDto) -> Self {
    Self {
      id: Uuid::new_v4(),
      position
    }
  }

  pub fn marker(
    &self,
    icon: MarkerIcon
  ) -> MarkerDescriptor {
    MarkerDescriptor {
      position: self.position,
      icon,
      popup: None
    }
  }
}

/// Holds at most one staged marker; each
/// new click replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagingArea {
  current: Option<StagedMarker>
}

impl StagingArea {
  pub fn current(
    &self
  ) -> Option<&StagedMarker> {
    self.current.as_ref()
  }

  /// Stages a marker at `position` and
  /// returns the one it replaced.
  pub fn stage(
    &mut self,
    position: PositionDto
  ) -> Option<StagedMarker> {
    let next = StagedMarker::at(position);
    debug!(
      id = %next.id,
      lat = position.lat,
      lng = position.lng,
      "staging marker"
    );
    self.current.replace(next)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn second_click_replaces_first() {
    let p = PositionDto::new(55.0, 39.0);
    let q = PositionDto::new(58.0, 38.0);
    let mut area = StagingArea::default();

    assert!(area.stage(p).is_none());
    let replaced = area
      .stage(q)
      .expect("first marker was replaced");

    assert_eq!(replaced.position, p);
    let current = area
      .current()
      .expect("one marker staged");
    assert_eq!(current.position, q);
    assert_ne!(current.id, replaced.id);
  }

  #[test]
  fn restaging_same_point_yields_new_identity()
   {
    let p = PositionDto::new(1.0, 2.0);
    let mut area = StagingArea::default();
    area.stage(p);
    let first = area
      .current()
      .map(|marker| marker.id)
      .expect("staged");
    area.stage(p);
    let second = area
      .current()
      .map(|marker| marker.id)
      .expect("staged");
    assert_ne!(first, second);
  }

  #[test]
  fn staged_marker_has_no_popup() {
    let staged =
      StagedMarker::at(PositionDto::new(
        3.0, 4.0
      ));
    let marker = staged.marker(MarkerIcon {
      url:    "icon.png".to_string(),
      size:   [25, 41],
      anchor: [12, 41]
    });
    assert!(marker.popup.is_none());
    assert_eq!(
      marker.position,
      staged.position
    );
  }
}
