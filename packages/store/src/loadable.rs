//! Load state of a page's remote data, plus the ticket guard that keeps a
//! slow, superseded response from overwriting a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    /// The read succeeded but there was nothing to show.
    Empty,
    Failed(String),
}

impl<T> Loadable<T> {
    /// `Empty` for a missing record.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Loaded)
    }

    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// `Empty` for `Ok(None)`.
    pub fn from_optional_result<E: std::fmt::Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(value) => Self::from_option(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Loading => Loadable::Loading,
            Self::Loaded(value) => Loadable::Loaded(f(value)),
            Self::Empty => Loadable::Empty,
            Self::Failed(reason) => Loadable::Failed(reason),
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// `Empty` for an empty list.
    pub fn from_list(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(items)
        }
    }

    /// `Empty` for `Ok` of an empty list.
    pub fn from_list_result<E: std::fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Self::from_list(items),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Issues monotonically increasing tickets; only the newest is current.
#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

/// Proof of which request a response belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Write `value` into `slot` only if `ticket` is still current.
    pub fn settle<T>(&self, ticket: Ticket, slot: &mut Loadable<T>, value: Loadable<T>) -> bool {
        if self.is_current(ticket) {
            *slot = value;
            true
        } else {
            tracing::debug!(ticket = ticket.0, "discarding stale response");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Loadable::<u8>::from_option(None), Loadable::Empty);
        assert_eq!(Loadable::from_option(Some(3)), Loadable::Loaded(3));
        assert_eq!(Loadable::<Vec<u8>>::from_list(vec![]), Loadable::Empty);
        assert_eq!(
            Loadable::<u8>::from_result(Err::<u8, _>("boom")),
            Loadable::Failed("boom".to_string())
        );
        assert_eq!(
            Loadable::<u8>::from_optional_result(Ok::<_, String>(None)),
            Loadable::Empty
        );
        assert_eq!(
            Loadable::from_list_result(Ok::<_, String>(vec![1])),
            Loadable::Loaded(vec![1])
        );
    }

    #[test]
    fn test_stale_ticket_never_replaces_state() {
        let generation = RequestGeneration::new();
        let mut state = Loadable::Loading;

        let first = generation.begin();
        let second = generation.begin();

        assert!(generation.settle(second, &mut state, Loadable::Loaded("new")));
        assert!(!generation.settle(first, &mut state, Loadable::Loaded("old")));
        assert_eq!(state, Loadable::Loaded("new"));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = RequestGeneration::new();
        let handle = generation.clone();
        let ticket = generation.begin();
        assert!(handle.is_current(ticket));
        handle.begin();
        assert!(!generation.is_current(ticket));
    }
}
