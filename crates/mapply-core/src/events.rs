use std::rc::Rc;

use mapply_shared::{
  MapEventDto,
  MapEventsPayload
};
use tracing::{
  debug,
  warn
};

/// Immutable, shared list of fetched
/// events. Everything rendered for one
/// page is derived from a single instance.
pub type EventCollection = Rc<[MapEventDto]>;

/// Turns a decoded response body into an
/// [`EventCollection`]. Out-of-range
/// coordinates are reported but kept.
pub fn collect_events(
  payload: MapEventsPayload
) -> EventCollection {
  let events = payload.into_events();

  for (index, event) in
    out_of_range(&events)
  {
    warn!(
      index,
      id = ?event.id,
      lat = event.position.lat,
      lng = event.position.lng,
      "event position outside WGS84 \
       range; passing through"
    );
  }

  debug!(
    count = events.len(),
    "collected map events"
  );
  Rc::from(events)
}

pub fn out_of_range(
  events: &[MapEventDto]
) -> impl Iterator<Item = (usize, &MapEventDto)>
{
  events.iter().enumerate().filter(
    |(_, event)| {
      !event.position.is_in_range()
    }
  )
}
