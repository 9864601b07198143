//! Level state store: metadata, live draft and locked history.
//!
//! ## StoreState
//!
//! The data that gets persisted:
//! - `meta`: name and viewed level
//! - `current`: the live draft for the viewed level
//! - `history` (persisted as `build`): locked snapshots by level
//!
//! ## LevelStore
//!
//! Owns a `StoreState` and its subscribers. Every mutation notifies
//! subscribers once it has completed, so a subscriber can always persist
//! the whole state with a full overwrite.
//!
//! Per level the lifecycle is `UNVISITED -> DRAFTING -> LOCKED <-> DRAFTING`.
//! Edits only ever touch the live draft; a snapshot changes only on `lock`.

use im::OrdMap;
use serde::Serialize;

use crate::character::{CharacterMeta, DraftField, LevelDraft, LevelSnapshot};
use crate::core::error::Result;
use crate::core::Level;
use crate::export::BuildExport;

use super::observer::{StoreEvent, StoreListener, SubscriptionId};
use super::persist::{restore_state, BlobStore};

/// Locked snapshots keyed by level.
pub type LevelHistory = OrdMap<Level, LevelSnapshot>;

/// Everything the store persists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StoreState {
    pub(crate) meta: CharacterMeta,
    #[serde(rename = "build")]
    pub(crate) history: LevelHistory,
    pub(crate) current: LevelDraft,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            meta: CharacterMeta::default(),
            history: LevelHistory::new(),
            current: LevelDraft::template(Level::MIN),
        }
    }
}

impl StoreState {
    #[must_use]
    pub fn meta(&self) -> &CharacterMeta {
        &self.meta
    }

    /// The live draft for the viewed level.
    #[must_use]
    pub fn current(&self) -> &LevelDraft {
        &self.current
    }

    #[must_use]
    pub fn history(&self) -> &LevelHistory {
        &self.history
    }

    /// Serialize as `{ meta, build, current }` JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The draft a visit to `level` starts from.
    pub(crate) fn draft_for(&self, level: Level) -> LevelDraft {
        match self.history.get(&level) {
            Some(snapshot) => snapshot.thaw(),
            None => LevelDraft::template(level),
        }
    }
}

/// The single source of truth for a character's per-level state.
///
/// ## Example
///
/// ```
/// use daggerheart_builder::{DraftField, Level, LevelStore};
///
/// let mut store = LevelStore::new();
/// store.set_field(DraftField::Class, "Seraph");
/// store.toggle_card("Bolt Beacon");
/// assert_eq!(store.lock(), Level::new(1));
///
/// store.set_level(2);
/// assert!(store.current().cards().is_empty());
///
/// store.set_level(1);
/// assert_eq!(store.current().cards(), &["Bolt Beacon".to_string()]);
/// ```
#[derive(Default)]
pub struct LevelStore {
    state: StoreState,
    listeners: Vec<(SubscriptionId, Box<dyn StoreListener>)>,
    next_subscription: u32,
}

impl LevelStore {
    /// Create an empty store: unnamed, level 1, no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a persisted blob (see [`LevelStore::restore_from_serialized`]).
    #[must_use]
    pub fn from_serialized(blob: &str) -> Self {
        Self {
            state: restore_state(blob),
            ..Self::default()
        }
    }

    /// Open the store persisted under `key`, or a fresh one if none exists.
    #[must_use]
    pub fn open(blobs: &impl BlobStore, key: &str) -> Self {
        match blobs.get(key) {
            Some(blob) => Self::from_serialized(&blob),
            None => Self::new(),
        }
    }

    // === Read Access ===

    #[must_use]
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    #[must_use]
    pub fn meta(&self) -> &CharacterMeta {
        &self.state.meta
    }

    #[must_use]
    pub fn current(&self) -> &LevelDraft {
        &self.state.current
    }

    #[must_use]
    pub fn history(&self) -> &LevelHistory {
        &self.state.history
    }

    /// The locked snapshot for `level`, if that level was ever locked.
    #[must_use]
    pub fn snapshot(&self, level: Level) -> Option<&LevelSnapshot> {
        self.state.history.get(&level)
    }

    /// Whether `level` has been locked.
    #[must_use]
    pub fn is_locked(&self, level: Level) -> bool {
        self.state.history.contains_key(&level)
    }

    // === Subscriptions ===

    /// Register a listener for every subsequent event.
    pub fn subscribe(&mut self, listener: impl StoreListener + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener.on_event(&event, &self.state);
        }
    }

    // === Mutations ===

    /// Rename the character.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.meta.name = name.into();
        self.notify(StoreEvent::Renamed);
    }

    /// Navigate to level `n`, clamped to 1-10.
    ///
    /// The live draft becomes a fresh copy of the snapshot for that level if
    /// it was locked, otherwise a default template. Unlocked edits on the
    /// level being left are discarded.
    pub fn set_level(&mut self, n: i64) -> Level {
        let level = Level::new(n);
        self.state.meta.level = level;
        self.state.current = self.state.draft_for(level);
        self.notify(StoreEvent::LevelChanged(level));
        level
    }

    /// Apply raw input to one field of the live draft.
    pub fn set_field(&mut self, field: DraftField, value: &str) {
        self.state.current.apply(field, value);
        self.notify(StoreEvent::FieldChanged(field));
    }

    /// Apply raw input to the field named by a text path such as
    /// `"traits.agility"`.
    ///
    /// Fails only when the path names no field; values are always coerced.
    pub fn set_field_path(&mut self, path: &str, value: &str) -> Result<()> {
        let field = path.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Select or deselect a card on the live draft.
    ///
    /// Returns true if the card is selected afterwards.
    pub fn toggle_card(&mut self, name: &str) -> bool {
        let selected = self.state.current.toggle_card(name);
        self.notify(StoreEvent::CardToggled {
            name: name.to_string(),
            selected,
        });
        selected
    }

    /// Freeze the live draft into history under its level.
    ///
    /// Replaces any earlier snapshot for that level.
    pub fn lock(&mut self) -> Level {
        let level = self.state.current.level();
        let replaced = self
            .state
            .history
            .insert(level, LevelSnapshot::freeze(&self.state.current))
            .is_some();
        tracing::info!(%level, replaced, "level locked");
        self.notify(StoreEvent::Locked(level));
        level
    }

    /// Clear history, metadata and the live draft.
    pub fn reset(&mut self) {
        self.state = StoreState::default();
        tracing::info!("store reset");
        self.notify(StoreEvent::Reset);
    }

    /// Replace all state from a persisted blob.
    ///
    /// Never fails: unparsable blobs yield an empty store and malformed
    /// parts fall back to their defaults field by field.
    pub fn restore_from_serialized(&mut self, blob: &str) {
        self.state = restore_state(blob);
        self.notify(StoreEvent::Restored);
    }

    // === Output ===

    /// Serialize the whole state for a full-overwrite write.
    pub fn to_serialized(&self) -> Result<String> {
        self.state.to_json()
    }

    /// Summarize locked levels for download.
    #[must_use]
    pub fn export(&self) -> BuildExport {
        BuildExport::new(&self.state.meta, &self.state.history)
    }
}

impl std::fmt::Debug for LevelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_store() {
        let store = LevelStore::new();
        assert_eq!(store.meta(), &CharacterMeta::default());
        assert_eq!(store.current(), &LevelDraft::template(Level::MIN));
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_set_level_clamps() {
        let mut store = LevelStore::new();
        assert_eq!(store.set_level(15), Level::MAX);
        assert_eq!(store.current().level(), Level::MAX);
        assert_eq!(store.set_level(-2), Level::MIN);
        assert_eq!(store.meta().level, Level::MIN);
    }

    #[test]
    fn test_unlocked_edits_discarded_on_navigation() {
        let mut store = LevelStore::new();
        store.set_field(DraftField::Hp, "9");
        store.set_level(2);
        store.set_level(1);
        assert_eq!(store.current().hp(), 6);
    }

    #[test]
    fn test_relock_overwrites() {
        let mut store = LevelStore::new();
        store.set_field(DraftField::Trait(Trait::Strength), "1");
        store.lock();
        store.set_field(DraftField::Trait(Trait::Strength), "2");
        store.lock();

        assert_eq!(store.history().len(), 1);
        let snapshot = store.snapshot(Level::MIN).unwrap();
        assert_eq!(snapshot.draft().traits().get(Trait::Strength), 2);
    }

    #[test]
    fn test_set_field_path() {
        let mut store = LevelStore::new();
        store.set_field_path("heritage.ancestry", "Katari").unwrap();
        assert_eq!(store.current().heritage().ancestry, "Katari");
        assert!(store.set_field_path("heritage.height", "tall").is_err());
    }

    #[test]
    fn test_events_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut store = LevelStore::new();
        store.subscribe(move |event: &StoreEvent, _: &StoreState| {
            sink.borrow_mut().push(event.clone());
        });

        store.set_name("Vex");
        store.toggle_card("Rune Ward");
        store.lock();
        store.set_level(3);
        store.reset();

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::Renamed,
                StoreEvent::CardToggled { name: "Rune Ward".into(), selected: true },
                StoreEvent::Locked(Level::MIN),
                StoreEvent::LevelChanged(Level::new(3)),
                StoreEvent::Reset,
            ]
        );
    }

    #[test]
    fn test_listener_sees_completed_state() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);

        let mut store = LevelStore::new();
        store.subscribe(move |_: &StoreEvent, state: &StoreState| {
            *sink.borrow_mut() = Some(state.history().len());
        });
        store.lock();

        assert_eq!(*seen.borrow(), Some(1));
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut store = LevelStore::new();
        let id = store.subscribe(move |_: &StoreEvent, _: &StoreState| *sink.borrow_mut() += 1);
        store.set_name("A");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_name("B");

        assert_eq!(*count.borrow(), 1);
    }
}
