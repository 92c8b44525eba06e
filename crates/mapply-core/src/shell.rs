use crate::config::FooterConfig;

pub const BRAND_TITLE: &str = "Mapply";
pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str =
  "Error has happened.";

/// The footer stays hidden until the page
/// has been scrolled past the configured
/// offset.
pub fn footer_visible(
  scroll_y: f64,
  cfg: &FooterConfig
) -> bool {
  scroll_y.is_finite()
    && scroll_y > cfg.reveal_offset_px
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn footer_reveals_after_scrolling() {
    let cfg = FooterConfig::default();
    assert!(!footer_visible(0.0, &cfg));
    assert!(footer_visible(1.0, &cfg));

    let cfg = FooterConfig {
      reveal_offset_px: 120.0
    };
    assert!(!footer_visible(120.0, &cfg));
    assert!(footer_visible(121.0, &cfg));
    assert!(!footer_visible(f64::NAN, &cfg));
  }
}
