use std::rc::Rc;

use gloo::events::EventListener;
use mapply_core::config::MapConfig;
use mapply_core::shell::{
  BRAND_TITLE,
  footer_visible
};
use yew::{
  Html,
  function_component,
  html,
  use_context,
  use_effect_with,
  use_state_eq
};

/// Hidden until the page is scrolled down.
#[function_component(Footer)]
pub fn footer() -> Html {
  let config = use_context::<Rc<MapConfig>>()
    .unwrap_or_default();
  let visible = use_state_eq(|| false);

  {
    let visible = visible.clone();
    let footer_cfg = config.footer.clone();

    use_effect_with((), move |_| {
      let listener =
        web_sys::window().map(|window| {
          let target = window.clone();
          EventListener::new(
            &target,
            "scroll",
            move |_| {
              let scroll_y =
                window.scroll_y().unwrap_or(0.0);
              let next = footer_visible(
                scroll_y,
                &footer_cfg
              );
              visible.set(next);
            }
          )
        });

      if listener.is_none() {
        tracing::warn!(
          "no window; footer stays hidden"
        );
      }

      move || drop(listener)
    });
  }

  if !*visible {
    return html! {};
  }

  html! {
      <footer class="site-footer">
          { format!("{BRAND_TITLE} · map events") }
      </footer>
  }
}
