use anyhow::{
  Context,
  anyhow
};
use mapply_shared::{
  MAP_EVENTS_PATH,
  PositionDto
};
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info
};

/// Highest zoom level served by the
/// public OpenStreetMap tile servers.
pub const MAX_ZOOM: u8 = 19;

pub const DEFAULT_TILE_URL_TEMPLATE:
  &str =
  "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION:
  &str = "&copy; <a \
          href=\"https://www.openstreetmap.org/copyright\">\
          OpenStreetMap</a> contributors";
pub const DEFAULT_MARKER_ICON_URL: &str =
  "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";
pub const DEFAULT_PLACEHOLDER_POPUP:
  &str = "A pretty CSS3 popup. <br /> \
          Easily customizable.";

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct MapConfig {
  pub api:    ApiConfig,
  pub tiles:  TileConfig,
  pub view:   ViewConfig,
  pub marker: MarkerConfig,
  pub footer: FooterConfig
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Default,
  Deserialize,
)]
#[serde(default)]
pub struct ApiConfig {
  /// Origin of the API server. Empty
  /// means same origin as the page.
  pub base_url: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct TileConfig {
  pub url_template: String,
  pub attribution:  String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct ViewConfig {
  pub zoom:              u8,
  pub scroll_wheel_zoom: bool,
  /// Center used when there is no event
  /// to center on.
  pub fallback_center:   PositionDto
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct MarkerConfig {
  pub icon_url:         String,
  pub icon_size:        [u32; 2],
  pub icon_anchor:      [u32; 2],
  pub popup:            PopupMode,
  pub placeholder_text: String
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PopupMode {
  /// Fixed text for every marker.
  #[default]
  Placeholder,
  /// Title and description of the
  /// event behind the marker.
  Record
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct FooterConfig {
  pub reveal_offset_px: f64
}

impl Default for MapConfig {
  fn default() -> Self {
    Self {
      api:    ApiConfig::default(),
      tiles:  TileConfig::default(),
      view:   ViewConfig::default(),
      marker: MarkerConfig::default(),
      footer: FooterConfig::default()
    }
  }
}

impl Default for TileConfig {
  fn default() -> Self {
    Self {
      url_template:
        DEFAULT_TILE_URL_TEMPLATE
          .to_string(),
      attribution:
        DEFAULT_TILE_ATTRIBUTION
          .to_string()
    }
  }
}

impl Default for ViewConfig {
  fn default() -> Self {
    Self {
      zoom:              4,
      scroll_wheel_zoom: false,
      fallback_center:
        PositionDto::new(0.0, 0.0)
    }
  }
}

impl Default for MarkerConfig {
  fn default() -> Self {
    Self {
      icon_url:         DEFAULT_MARKER_ICON_URL
        .to_string(),
      icon_size:        [25, 41],
      icon_anchor:      [12, 41],
      popup:            PopupMode::Placeholder,
      placeholder_text:
        DEFAULT_PLACEHOLDER_POPUP
          .to_string()
    }
  }
}

impl Default for FooterConfig {
  fn default() -> Self {
    Self {
      reveal_offset_px: 0.0
    }
  }
}

impl ApiConfig {
  pub fn events_url(&self) -> String {
    format!(
      "{}{MAP_EVENTS_PATH}",
      self.base_url.trim_end_matches('/')
    )
  }
}

impl MapConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: MapConfig =
      toml::from_str(text).context(
        "failed to parse map config"
      )?;
    cfg.validate()?;
    debug!(
      zoom = cfg.view.zoom,
      popup = ?cfg.marker.popup,
      "parsed map config"
    );
    Ok(cfg)
  }

  /// Parses `text`, falling back to the
  /// built-in defaults when it is broken.
  pub fn load_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => {
        info!(
          events_url = %cfg.api.events_url(),
          "loaded map config"
        );
        cfg
      }
      | Err(error) => {
        error!(error = %format!("{error:#}"), "invalid map config; using defaults");
        Self::default()
      }
    }
  }

  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    if self.view.zoom > MAX_ZOOM {
      return Err(anyhow!(
        "view.zoom {} exceeds maximum \
         {MAX_ZOOM}",
        self.view.zoom
      ));
    }

    let template =
      &self.tiles.url_template;
    if ["{z}", "{x}", "{y}"]
      .iter()
      .any(|part| !template.contains(part))
    {
      return Err(anyhow!(
        "tiles.url_template must \
         contain {{z}}, {{x}} and {{y}}: \
         {template}"
      ));
    }

    if self.marker.icon_url.trim().is_empty()
    {
      return Err(anyhow!(
        "marker.icon_url cannot be empty"
      ));
    }

    if self
      .marker
      .icon_size
      .contains(&0)
    {
      return Err(anyhow!(
        "marker.icon_size must be \
         positive: {:?}",
        self.marker.icon_size
      ));
    }

    let offset =
      self.footer.reveal_offset_px;
    if !offset.is_finite() || offset < 0.0
    {
      return Err(anyhow!(
        "footer.reveal_offset_px must be \
         a non-negative number: {offset}"
      ));
    }

    Ok(())
  }
}
