use mapply_shared::{
  MapEventDto,
  PositionDto,
  map_event_path
};

use crate::config::{
  MarkerConfig,
  PopupMode
};

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
  pub url:    String,
  pub size:   [u32; 2],
  pub anchor: [u32; 2]
}

impl MarkerIcon {
  pub fn from_config(
    cfg: &MarkerConfig
  ) -> Self {
    Self {
      url:    cfg.icon_url.clone(),
      size:   cfg.icon_size,
      anchor: cfg.icon_anchor
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupContent {
  /// Same text for every marker. This is
  /// the default and ignores the record
  /// entirely.
  Placeholder(String),
  Record {
    title:       String,
    description: String,
    link:        Option<String>
  }
}

impl PopupContent {
  /// HTML handed to the popup primitive.
  /// Record fields are escaped; the
  /// placeholder is trusted config.
  pub fn to_html(&self) -> String {
    match self {
      | Self::Placeholder(text) => {
        text.clone()
      }
      | Self::Record {
        title,
        description,
        link
      } => {
        let mut html = format!(
          "<strong>{}</strong>",
          escape_html(title)
        );
        if !description.is_empty() {
          html.push_str("<br />");
          html.push_str(&escape_html(
            description
          ));
        }
        if let Some(href) = link {
          html.push_str(&format!(
            "<br /><a href=\"{}\">raw</a>",
            escape_html(href)
          ));
        }
        html
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDescriptor {
  pub position: PositionDto,
  pub icon:     MarkerIcon,
  pub popup:    Option<PopupContent>
}

pub fn render_marker(
  event: &MapEventDto,
  cfg: &MarkerConfig
) -> MarkerDescriptor {
  let popup = match cfg.popup {
    | PopupMode::Placeholder => {
      PopupContent::Placeholder(
        cfg.placeholder_text.clone()
      )
    }
    | PopupMode::Record => {
      PopupContent::Record {
        title:       event.title.clone(),
        description: event
          .description
          .clone(),
        link:        event
          .id
          .map(map_event_path)
      }
    }
  };

  MarkerDescriptor {
    position: event.position,
    icon:     MarkerIcon::from_config(cfg),
    popup:    Some(popup)
  }
}

/// One marker per event, in input order.
/// Identical positions are not merged.
pub fn render_markers(
  events: &[MapEventDto],
  cfg: &MarkerConfig
) -> Vec<MarkerDescriptor> {
  events
    .iter()
    .map(|event| render_marker(event, cfg))
    .collect()
}

fn escape_html(raw: &str) -> String {
  let mut out =
    String::with_capacity(raw.len());
  for ch in raw.chars() {
    match ch {
      | '&' => out.push_str("&amp;"),
      | '<' => out.push_str("&lt;"),
      | '>' => out.push_str("&gt;"),
      | '"' => out.push_str("&quot;"),
      | '\'' => out.push_str("&#39;"),
      | _ => out.push(ch)
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn event(
    id: Option<i64>,
    title: &str,
    lat: f64,
    lng: f64
  ) -> MapEventDto {
    MapEventDto {
      id,
      title: title.to_string(),
      description: "details".to_string(),
      position: PositionDto::new(lat, lng)
    }
  }

  #[test]
  fn placeholder_popup_ignores_record() {
    let cfg = MarkerConfig::default();
    let markers = render_markers(
      &[
        event(Some(1), "A", 55.0, 39.0),
        event(Some(2), "B", 58.0, 38.0)
      ],
      &cfg
    );

    assert_eq!(markers.len(), 2);
    for marker in &markers {
      assert_eq!(
        marker.popup,
        Some(PopupContent::Placeholder(
          cfg.placeholder_text.clone()
        ))
      );
      assert_eq!(marker.icon.size, [25, 41]);
      assert_eq!(
        marker.icon.anchor,
        [12, 41]
      );
    }
    assert_eq!(
      markers[1].position,
      PositionDto::new(58.0, 38.0)
    );
  }

  #[test]
  fn duplicate_positions_stay_separate() {
    let cfg = MarkerConfig::default();
    let markers = render_markers(
      &[
        event(None, "A", 1.0, 1.0),
        event(None, "B", 1.0, 1.0)
      ],
      &cfg
    );
    assert_eq!(markers.len(), 2);
    assert_eq!(
      markers[0].position,
      markers[1].position
    );
  }

  #[test]
  fn record_popup_escapes_and_links() {
    let cfg = MarkerConfig {
      popup: PopupMode::Record,
      ..MarkerConfig::default()
    };
    let marker = render_marker(
      &event(Some(4), "<b>Fair</b>", 0.0, 0.0),
      &cfg
    );
    let html = marker
      .popup
      .expect("event markers carry a popup")
      .to_html();

    assert_eq!(
      html,
      "<strong>&lt;b&gt;Fair&lt;/b&gt;</strong>\
       <br />details\
       <br /><a href=\"/api/v1/map/events/4\">raw</a>"
    );
  }
}
