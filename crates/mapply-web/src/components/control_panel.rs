use mapply_core::panel::EventRow;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::EventItem;

#[derive(Properties, PartialEq)]
pub struct ControlPanelProps {
  pub rows: Vec<EventRow>
}

#[function_component(ControlPanel)]
pub fn control_panel(
  props: &ControlPanelProps
) -> Html {
  html! {
      <aside class="control-panel">
          <ul>
              {
                  for props.rows.iter().cloned().map(|row| {
                      let index = row.index;
                      html! { <EventItem key={index} row={row} /> }
                  })
              }
          </ul>
      </aside>
  }
}
