//! Session-scoped cache of query results.
//!
//! One entry per query key. Each entry
//! walks `Idle -> Loading -> {Success,
//! Error}`. Every mount calls
//! [`QueryCache::begin`] and receives a
//! [`FetchTicket`]; the fetch result is
//! handed back through
//! [`QueryCache::resolve`] with that
//! ticket. A cached success keeps being
//! served while the refetch runs. Tickets
//! from superseded fetches are ignored.

use std::collections::HashMap;

use tracing::{
  debug,
  info,
  warn
};

/// Query key for the full list of map
/// events.
pub const MAP_EVENTS_QUERY: &str =
  "map_events";

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
  Idle,
  Loading,
  Success(T),
  Error(String)
}

impl<T> QueryState<T> {
  pub fn is_loading(&self) -> bool {
    matches!(self, Self::Loading)
  }

  pub fn is_terminal(&self) -> bool {
    matches!(
      self,
      Self::Success(_) | Self::Error(_)
    )
  }

  /// State a newly mounted view starts
  /// from: a cached success is shown
  /// right away, anything else is
  /// `Loading` because the mount fetches.
  pub fn on_mount(self) -> Self {
    match self {
      | Self::Success(value) => {
        Self::Success(value)
      }
      | _ => Self::Loading
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      | Self::Idle => "idle",
      | Self::Loading => "loading",
      | Self::Success(_) => "success",
      | Self::Error(_) => "error"
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Hash,
)]
pub struct FetchTicket {
  key:        String,
  generation: u64
}

impl FetchTicket {
  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }
}

#[derive(Debug)]
struct QueryEntry<T> {
  state:      QueryState<T>,
  generation: u64
}

#[derive(Debug)]
pub struct QueryCache<T> {
  entries: HashMap<String, QueryEntry<T>>
}

impl<T> Default for QueryCache<T> {
  fn default() -> Self {
    Self {
      entries: HashMap::new()
    }
  }
}

impl<T: Clone> QueryCache<T> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn state(
    &self,
    key: &str
  ) -> QueryState<T> {
    self
      .entries
      .get(key)
      .map(|entry| entry.state.clone())
      .unwrap_or(QueryState::Idle)
  }

  /// Starts a fetch for `key` and returns
  /// the ticket it must resolve with.
  /// A cached success stays visible until
  /// the new result lands; any other
  /// state becomes `Loading`.
  #[tracing::instrument(skip(self))]
  pub fn begin(
    &mut self,
    key: &str
  ) -> FetchTicket {
    let entry = self
      .entries
      .entry(key.to_string())
      .or_insert_with(|| QueryEntry {
        state:      QueryState::Idle,
        generation: 0
      });

    if entry.state.is_loading() {
      debug!(
        key,
        generation = entry.generation,
        "superseding in-flight fetch"
      );
    }

    entry.generation += 1;
    if matches!(
      entry.state,
      QueryState::Success(_)
    ) {
      debug!(
        key,
        generation = entry.generation,
        "refetching behind cached result"
      );
    } else {
      entry.state = QueryState::Loading;
      info!(
        key,
        generation = entry.generation,
        "query loading"
      );
    }

    FetchTicket {
      key:        key.to_string(),
      generation: entry.generation
    }
  }

  /// Stores the outcome of the fetch
  /// identified by `ticket`. Returns
  /// `false` when the ticket is stale and
  /// the result was dropped.
  pub fn resolve(
    &mut self,
    ticket: &FetchTicket,
    result: Result<T, String>
  ) -> bool {
    let Some(entry) =
      self.entries.get_mut(&ticket.key)
    else {
      warn!(
        key = %ticket.key,
        "resolve for unknown query; \
         dropping result"
      );
      return false;
    };

    if entry.generation != ticket.generation
    {
      debug!(
        key = %ticket.key,
        ticket = ticket.generation,
        current = entry.generation,
        "stale fetch result dropped"
      );
      return false;
    }

    entry.state = match result {
      | Ok(value) => {
        info!(key = %ticket.key, "query succeeded");
        QueryState::Success(value)
      }
      | Err(error) => {
        warn!(key = %ticket.key, %error, "query failed");
        QueryState::Error(error)
      }
    };
    true
  }
}
