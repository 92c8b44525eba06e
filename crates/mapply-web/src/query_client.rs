use std::cell::{
  Cell,
  RefCell
};
use std::rc::Rc;

use mapply_core::events::{
  EventCollection,
  collect_events
};
use mapply_core::query::{
  FetchTicket,
  MAP_EVENTS_QUERY,
  QueryCache,
  QueryState
};
use yew::{
  hook,
  use_context,
  use_effect_with,
  use_state
};

use crate::api::fetch_map_events;

/// App-session query cache, shared with
/// components through a `ContextProvider`.
#[derive(Clone, Default)]
pub struct QueryClient {
  cache:
    Rc<RefCell<QueryCache<EventCollection>>>
}

impl PartialEq for QueryClient {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.cache, &other.cache)
  }
}

impl QueryClient {
  pub fn state(
    &self,
    key: &str
  ) -> QueryState<EventCollection> {
    self.cache.borrow().state(key)
  }

  fn begin(&self, key: &str) -> FetchTicket {
    self.cache.borrow_mut().begin(key)
  }

  fn resolve(
    &self,
    ticket: &FetchTicket,
    result: Result<EventCollection, String>
  ) -> bool {
    self
      .cache
      .borrow_mut()
      .resolve(ticket, result)
  }

  /// Stores a fetch result and returns the
  /// state to show, or `None` when the
  /// result must not reach the view.
  fn settle(
    &self,
    ticket: &FetchTicket,
    result: Result<EventCollection, String>,
    guard: &MountGuard
  ) -> Option<QueryState<EventCollection>> {
    let applied = self.resolve(ticket, result);
    let state = self.state(ticket.key());
    if applied && guard.is_mounted() {
      tracing::debug!(
        key = ticket.key(),
        generation = ticket.generation(),
        state = state.label(),
        "fetch result delivered"
      );
      Some(state)
    } else {
      tracing::debug!(
        key = ticket.key(),
        generation = ticket.generation(),
        applied,
        mounted = guard.is_mounted(),
        "fetch result not delivered to view"
      );
      None
    }
  }
}

/// Cleared when the owning component
/// unmounts so late fetch results are not
/// pushed into dropped state.
#[derive(Clone)]
struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
  fn new() -> Self {
    Self(Rc::new(Cell::new(true)))
  }

  fn is_mounted(&self) -> bool {
    self.0.get()
  }

  fn release(&self) {
    self.0.set(false);
  }
}

/// Map events for the current mount. Each
/// mount fetches; a cached success is
/// shown until the new result arrives.
#[hook]
pub fn use_map_events(
  url: String
) -> QueryState<EventCollection> {
  let fallback =
    use_state(QueryClient::default);
  let context =
    use_context::<QueryClient>();
  let client = match context {
    | Some(client) => client,
    | None => {
      tracing::warn!(
        "no query client in context; \
         using a component-local cache"
      );
      (*fallback).clone()
    }
  };

  let state = {
    let client = client.clone();
    use_state(move || {
      client
        .state(MAP_EVENTS_QUERY)
        .on_mount()
    })
  };

  {
    let state = state.clone();

    use_effect_with((), move |_| {
      let guard = MountGuard::new();
      let ticket =
        client.begin(MAP_EVENTS_QUERY);
      let current =
        client.state(MAP_EVENTS_QUERY);
      tracing::debug!(
        key = ticket.key(),
        generation = ticket.generation(),
        state = current.label(),
        "map events mount"
      );
      state.set(current);

      {
        let guard = guard.clone();

        wasm_bindgen_futures::spawn_local(
          async move {
            let result =
              fetch_map_events(&url)
                .await
                .map(collect_events);
            if let Err(error) = &result {
              tracing::error!(%error, url = %url, "map events fetch failed");
            }

            if let Some(next) = client
              .settle(&ticket, result, &guard)
            {
              state.set(next);
            }
          }
        );
      }

      move || guard.release()
    });
  }

  (*state).clone()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn no_events() -> EventCollection {
    Rc::from(Vec::new())
  }

  #[test]
  fn clients_compare_by_identity() {
    let client = QueryClient::default();
    let same = client.clone();
    let other = QueryClient::default();

    assert!(client == same);
    assert!(client != other);
  }

  #[test]
  fn clones_share_the_cache() {
    let client = QueryClient::default();
    let same = client.clone();

    let ticket = client.begin(MAP_EVENTS_QUERY);
    assert!(
      same
        .state(MAP_EVENTS_QUERY)
        .is_loading()
    );

    assert!(
      client.resolve(&ticket, Ok(no_events()))
    );
    let again = same.begin(MAP_EVENTS_QUERY);
    assert!(
      again.generation() > ticket.generation()
    );
  }

  #[test]
  fn result_reaches_a_mounted_view() {
    let client = QueryClient::default();
    let guard = MountGuard::new();
    let ticket = client.begin(MAP_EVENTS_QUERY);

    let delivered = client
      .settle(&ticket, Ok(no_events()), &guard)
      .expect("mounted view receives result");
    assert_eq!(delivered.label(), "success");
  }

  #[test]
  fn result_after_unmount_is_cached_not_delivered()
   {
    let client = QueryClient::default();
    let guard = MountGuard::new();
    let ticket = client.begin(MAP_EVENTS_QUERY);

    guard.release();
    assert!(
      client
        .settle(
          &ticket,
          Ok(no_events()),
          &guard
        )
        .is_none()
    );
    assert_eq!(
      client.state(MAP_EVENTS_QUERY).label(),
      "success"
    );
  }

  #[test]
  fn superseded_result_is_not_delivered() {
    let client = QueryClient::default();
    let first_mount = MountGuard::new();
    let first = client.begin(MAP_EVENTS_QUERY);
    first_mount.release();

    let second_mount = MountGuard::new();
    let second = client.begin(MAP_EVENTS_QUERY);

    assert!(
      client
        .settle(
          &first,
          Err("late".to_string()),
          &second_mount
        )
        .is_none()
    );
    assert!(
      client
        .state(MAP_EVENTS_QUERY)
        .is_loading()
    );
    assert!(
      client
        .settle(
          &second,
          Ok(no_events()),
          &second_mount
        )
        .is_some()
    );
  }
}
