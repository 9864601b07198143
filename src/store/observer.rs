//! Change notification for store subscribers.
//!
//! Presentation and persistence react to store changes through
//! `StoreListener`; the store itself knows nothing about either.

use crate::character::DraftField;
use crate::core::Level;

use super::state::StoreState;

/// What a mutation did. Emitted after the mutation has completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    /// The viewed level changed and the live draft was replaced.
    LevelChanged(Level),
    /// The character was renamed.
    Renamed,
    /// One field of the live draft changed.
    FieldChanged(DraftField),
    /// A card was selected or deselected on the live draft.
    CardToggled { name: String, selected: bool },
    /// The live draft was locked into history.
    Locked(Level),
    /// All state was cleared.
    Reset,
    /// State was replaced from a persisted blob.
    Restored,
}

/// Receives every store event with read access to the new state.
pub trait StoreListener {
    fn on_event(&mut self, event: &StoreEvent, state: &StoreState);
}

impl<F> StoreListener for F
where
    F: FnMut(&StoreEvent, &StoreState),
{
    fn on_event(&mut self, event: &StoreEvent, state: &StoreState) {
        self(event, state);
    }
}

/// Handle returned by `LevelStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}
