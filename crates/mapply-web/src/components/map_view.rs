use std::rc::Rc;

use mapply_core::config::TileConfig;
use mapply_core::markers::{
  MarkerDescriptor,
  MarkerIcon
};
use mapply_core::panel::coordinate_label;
use mapply_core::staging::{
  StagedMarker,
  StagingArea
};
use mapply_core::viewport::Viewport;
use mapply_shared::PositionDto;
use web_sys::HtmlElement;
use yew::{
  Html,
  Properties,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_node_ref,
  use_reducer
};

use crate::leaflet::MapHandle;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
  pub markers:     Vec<MarkerDescriptor>,
  pub viewport:    Viewport,
  pub tiles:       TileConfig,
  pub staged_icon: MarkerIcon
}

#[derive(Default, PartialEq)]
struct Staging(StagingArea);

enum StagingAction {
  Stage(PositionDto)
}

impl Reducible for Staging {
  type Action = StagingAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut area = self.0.clone();
    match action {
      | StagingAction::Stage(position) => {
        if let Some(replaced) =
          area.stage(position)
        {
          tracing::trace!(id = %replaced.id, "staged marker replaced");
        }
      }
    }
    Rc::new(Self(area))
  }
}

#[function_component(MapView)]
pub fn map_view(
  props: &MapViewProps
) -> Html {
  let container = use_node_ref();
  let handle =
    use_mut_ref(|| None::<MapHandle>);
  let staging =
    use_reducer(Staging::default);

  {
    let container = container.clone();
    let handle = handle.clone();
    let viewport = props.viewport.clone();
    let tiles = props.tiles.clone();
    let dispatcher = staging.dispatcher();

    use_effect_with((), move |_| {
      match container.cast::<HtmlElement>() {
        | Some(element) => {
          match MapHandle::mount(
            &element, &viewport, &tiles
          ) {
            | Ok(mut map) => {
              map.on_click(move |position| {
                dispatcher.dispatch(
                  StagingAction::Stage(position)
                );
              });
              *handle.borrow_mut() = Some(map);
            }
            | Err(error) => {
              tracing::error!(%error, "failed to mount map")
            }
          }
        }
        | None => {
          tracing::warn!(
            "map container not rendered; \
             skipping mount"
          )
        }
      }

      move || {
        handle.borrow_mut().take();
      }
    });
  }

  {
    let handle = handle.clone();

    use_effect_with(
      props.markers.clone(),
      move |markers| {
        if let Some(map) =
          handle.borrow_mut().as_mut()
          && let Err(error) =
            map.set_markers(markers)
        {
          tracing::error!(%error, "failed to place event markers");
        }
        || ()
      }
    );
  }

  let staged: Option<StagedMarker> =
    staging.0.current().cloned();

  {
    let handle = handle.clone();
    let icon = props.staged_icon.clone();

    use_effect_with(
      staged.clone(),
      move |staged| {
        let marker = staged
          .as_ref()
          .map(|staged| staged.marker(icon));
        if let Some(map) =
          handle.borrow_mut().as_mut()
          && let Err(error) =
            map.set_staged(marker.as_ref())
        {
          tracing::error!(%error, "failed to place staged marker");
        }
        || ()
      }
    );
  }

  html! {
      <div class="map-wrapper">
          <div id="map" class="map-surface" ref={container}></div>
          {
              match staged {
                  Some(staged) => html! {
                      <div class="staged-caption">
                          { format!("New marker: {}", coordinate_label(&staged.position)) }
                      </div>
                  },
                  None => html! {}
              }
          }
      </div>
  }
}
