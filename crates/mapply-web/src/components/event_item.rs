use mapply_core::panel::EventRow;
use yew::{
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EventItemProps {
  pub row: EventRow
}

#[function_component(EventItem)]
pub fn event_item(
  props: &EventItemProps
) -> Html {
  let index = props.row.index;
  // Hover hook; intentionally inert.
  let on_hover = move |_: MouseEvent| {
    tracing::trace!(index, "event row hovered");
  };

  html! {
      <li class="event-item" onmouseover={on_hover}>
          { &props.row.label }
      </li>
  }
}
