use mapply_shared::{
  MapEventDto,
  PositionDto
};
use tracing::debug;

use crate::config::ViewConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
  pub center:            PositionDto,
  pub zoom:              u8,
  pub scroll_wheel_zoom: bool
}

/// Centers on the first event. With no
/// events the configured fallback center
/// is used.
pub fn initial_viewport(
  events: &[MapEventDto],
  cfg: &ViewConfig
) -> Viewport {
  let center = match events.first() {
    | Some(first) => first.position,
    | None => {
      debug!(
        lat = cfg.fallback_center.lat,
        lng = cfg.fallback_center.lng,
        "no events; using fallback \
         center"
      );
      cfg.fallback_center
    }
  };

  Viewport {
    center,
    zoom: cfg.zoom,
    scroll_wheel_zoom: cfg
      .scroll_wheel_zoom
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn centers_on_first_event() {
    let events = vec![
      MapEventDto {
        id:          Some(1),
        title:       "A".to_string(),
        description: String::new(),
        position:    PositionDto::new(
          55.0, 39.0
        )
      },
      MapEventDto {
        id:          Some(2),
        title:       "B".to_string(),
        description: String::new(),
        position:    PositionDto::new(
          58.0, 38.0
        )
      },
    ];

    let viewport = initial_viewport(
      &events,
      &ViewConfig::default()
    );
    assert_eq!(
      viewport.center,
      PositionDto::new(55.0, 39.0)
    );
    assert_eq!(viewport.zoom, 4);
    assert!(!viewport.scroll_wheel_zoom);
  }

  #[test]
  fn empty_sequence_uses_fallback() {
    let cfg = ViewConfig {
      fallback_center: PositionDto::new(
        10.0, 20.0
      ),
      ..ViewConfig::default()
    };
    let viewport =
      initial_viewport(&[], &cfg);
    assert_eq!(
      viewport.center,
      PositionDto::new(10.0, 20.0)
    );
  }
}
