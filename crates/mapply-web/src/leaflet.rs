//! Thin bindings over the global `L`
//! object that `index.html` loads, plus a
//! [`MapHandle`] that owns one map
//! instance and its layers.

use js_sys::{
  Function,
  Object,
  Reflect
};
use mapply_core::config::TileConfig;
use mapply_core::markers::{
  MarkerDescriptor,
  MarkerIcon
};
use mapply_core::viewport::Viewport;
use mapply_shared::PositionDto;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(js_namespace = L, js_name = Map)]
  type LeafletMap;

  #[wasm_bindgen(js_namespace = L, js_name = Layer)]
  type Layer;

  #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
  fn create_map(
    element: &HtmlElement,
    options: &JsValue
  ) -> Result<LeafletMap, JsValue>;

  #[wasm_bindgen(method, js_name = setView)]
  fn set_view(
    this: &LeafletMap,
    center: &JsValue,
    zoom: f64
  ) -> LeafletMap;

  #[wasm_bindgen(method, js_name = on)]
  fn on(
    this: &LeafletMap,
    event: &str,
    handler: &Function
  ) -> LeafletMap;

  #[wasm_bindgen(method, js_name = remove)]
  fn remove_map(this: &LeafletMap);

  #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
  fn tile_layer(
    url_template: &str,
    options: &JsValue
  ) -> Result<Layer, JsValue>;

  #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
  fn marker(
    lat_lng: &JsValue,
    options: &JsValue
  ) -> Result<Layer, JsValue>;

  #[wasm_bindgen(catch, js_namespace = L, js_name = icon)]
  fn icon(
    options: &JsValue
  ) -> Result<JsValue, JsValue>;

  #[wasm_bindgen(method, js_name = addTo)]
  fn add_to(
    this: &Layer,
    map: &LeafletMap
  ) -> Layer;

  #[wasm_bindgen(method, js_name = bindPopup)]
  fn bind_popup(
    this: &Layer,
    content: &str
  ) -> Layer;

  #[wasm_bindgen(method, js_name = remove)]
  fn remove_layer(this: &Layer) -> Layer;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
  scroll_wheel_zoom: bool
}

#[derive(Serialize)]
struct TileOptions<'a> {
  attribution: &'a str
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconOptions<'a> {
  icon_url:    &'a str,
  icon_size:   [u32; 2],
  icon_anchor: [u32; 2]
}

type ClickHandler =
  Closure<dyn FnMut(JsValue)>;

/// One Leaflet map bound to a DOM
/// element. The map is removed from the
/// page when the handle is dropped.
pub struct MapHandle {
  map:     LeafletMap,
  click:   Option<ClickHandler>,
  markers: Vec<Layer>,
  staged:  Option<Layer>
}

impl MapHandle {
  pub fn mount(
    element: &HtmlElement,
    viewport: &Viewport,
    tiles: &TileConfig
  ) -> Result<Self, String> {
    let options = to_js(&MapOptions {
      scroll_wheel_zoom: viewport
        .scroll_wheel_zoom
    })?;
    let map = create_map(element, &options)
      .map_err(|e| {
        format!(
          "failed to create map: {e:?}"
        )
      })?;
    map.set_view(
      &to_js(&viewport.center.as_pair())?,
      f64::from(viewport.zoom)
    );

    let tile_options = to_js(&TileOptions {
      attribution: &tiles.attribution
    })?;
    tile_layer(
      &tiles.url_template,
      &tile_options
    )
    .map_err(|e| {
      format!(
        "failed to create tile layer: \
         {e:?}"
      )
    })?
    .add_to(&map);

    tracing::debug!(
      lat = viewport.center.lat,
      lng = viewport.center.lng,
      zoom = viewport.zoom,
      "mounted leaflet map"
    );

    Ok(Self {
      map,
      click: None,
      markers: Vec::new(),
      staged: None
    })
  }

  /// Calls `on_click` with the geographic
  /// position of every click on the map.
  pub fn on_click<F>(
    &mut self,
    mut on_click: F
  ) where
    F: FnMut(PositionDto) + 'static
  {
    let handler = Closure::<
      dyn FnMut(JsValue),
    >::new(
      move |event: JsValue| {
        match event_position(&event) {
          | Some(position) => {
            on_click(position)
          }
          | None => {
            tracing::warn!(
              "map click without latlng"
            )
          }
        }
      }
    );
    self.map.on(
      "click",
      handler.as_ref().unchecked_ref()
    );
    self.click = Some(handler);
  }

  /// Replaces all event markers.
  pub fn set_markers(
    &mut self,
    markers: &[MarkerDescriptor]
  ) -> Result<(), String> {
    for layer in self.markers.drain(..) {
      layer.remove_layer();
    }
    for descriptor in markers {
      let layer = self.add_marker(descriptor)?;
      self.markers.push(layer);
    }
    tracing::debug!(
      count = self.markers.len(),
      "placed event markers"
    );
    Ok(())
  }

  /// Shows `marker` as the staged marker,
  /// removing any previous one.
  pub fn set_staged(
    &mut self,
    marker: Option<&MarkerDescriptor>
  ) -> Result<(), String> {
    if let Some(previous) = self.staged.take()
    {
      previous.remove_layer();
    }
    if let Some(descriptor) = marker {
      self.staged =
        Some(self.add_marker(descriptor)?);
    }
    Ok(())
  }

  fn add_marker(
    &self,
    descriptor: &MarkerDescriptor
  ) -> Result<Layer, String> {
    let options = marker_options(
      &descriptor.icon
    )?;
    let layer = marker(
      &to_js(&descriptor.position.as_pair())?,
      &options
    )
    .map_err(|e| {
      format!(
        "failed to create marker: {e:?}"
      )
    })?
    .add_to(&self.map);

    if let Some(popup) = &descriptor.popup {
      layer.bind_popup(&popup.to_html());
    }
    Ok(layer)
  }
}

impl Drop for MapHandle {
  fn drop(&mut self) {
    self.map.remove_map();
    tracing::debug!(
      "removed leaflet map"
    );
  }
}

fn marker_options(
  icon_cfg: &MarkerIcon
) -> Result<JsValue, String> {
  let icon_options = to_js(&IconOptions {
    icon_url:    &icon_cfg.url,
    icon_size:   icon_cfg.size,
    icon_anchor: icon_cfg.anchor
  })?;
  let leaflet_icon = icon(&icon_options)
    .map_err(|e| {
      format!(
        "failed to create icon: {e:?}"
      )
    })?;

  let options = Object::new();
  Reflect::set(
    &options,
    &JsValue::from_str("icon"),
    &leaflet_icon
  )
  .map_err(|e| {
    format!(
      "failed to set marker icon: {e:?}"
    )
  })?;
  Ok(options.into())
}

fn event_position(
  event: &JsValue
) -> Option<PositionDto> {
  let latlng = Reflect::get(
    event,
    &JsValue::from_str("latlng")
  )
  .ok()?;
  let lat = Reflect::get(
    &latlng,
    &JsValue::from_str("lat")
  )
  .ok()?
  .as_f64()?;
  let lng = Reflect::get(
    &latlng,
    &JsValue::from_str("lng")
  )
  .ok()?
  .as_f64()?;
  Some(PositionDto::new(lat, lng))
}

fn to_js<T: Serialize + ?Sized>(
  value: &T
) -> Result<JsValue, String> {
  serde_wasm_bindgen::to_value(value)
    .map_err(|e| format!("encode error: {e}"))
}
