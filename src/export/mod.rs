//! Build export: a portable summary of every locked level.
//!
//! Only locked snapshots are exported. The live draft is never included,
//! so unlocked edits do not leak into a shared build.

use serde::Serialize;

use crate::character::CharacterMeta;
use crate::core::error::Result;
use crate::core::Level;
use crate::store::LevelHistory;

/// Name used when the character has none.
pub const UNNAMED_CHARACTER: &str = "Unnamed Character";

/// Exported build document: `{ name, finalLevel, levels }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuildExport {
    pub name: String,
    #[serde(rename = "finalLevel")]
    pub final_level: Level,
    pub levels: LevelHistory,
}

impl BuildExport {
    /// Summarize `history` for the character described by `meta`.
    ///
    /// `final_level` is the higher of the viewed level and the highest
    /// locked level.
    #[must_use]
    pub fn new(meta: &CharacterMeta, history: &LevelHistory) -> Self {
        let highest_locked = history.get_max().map(|(level, _)| *level);
        let final_level = highest_locked.map_or(meta.level, |locked| locked.max(meta.level));
        let name = if meta.name.trim().is_empty() {
            UNNAMED_CHARACTER.to_string()
        } else {
            meta.name.clone()
        };

        Self {
            name,
            final_level,
            // Persistent map clone, shares structure with the store.
            levels: history.clone(),
        }
    }

    /// Pretty-printed JSON bytes for the download handoff.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Suggested download file name derived from the character name.
    ///
    /// ```
    /// use daggerheart_builder::{CharacterMeta, LevelHistory};
    /// use daggerheart_builder::export::BuildExport;
    ///
    /// let meta = CharacterMeta { name: "Vex the Bold!".into(), ..Default::default() };
    /// let export = BuildExport::new(&meta, &LevelHistory::new());
    /// assert_eq!(export.file_name(), "vex_the_bold_build.json");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('_') {
                slug.push('_');
            }
        }
        let slug = slug.trim_end_matches('_');
        let slug = if slug.is_empty() { "unnamed_character" } else { slug };
        format!("{slug}_build.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{LevelDraft, LevelSnapshot};

    fn history_at(levels: &[i64]) -> LevelHistory {
        levels
            .iter()
            .map(|&n| {
                let level = Level::new(n);
                (level, LevelSnapshot::freeze(&LevelDraft::template(level)))
            })
            .collect()
    }

    #[test]
    fn test_no_locks_reports_viewed_level() {
        let meta = CharacterMeta { name: String::new(), level: Level::new(3) };
        let export = BuildExport::new(&meta, &LevelHistory::new());

        assert_eq!(export.name, UNNAMED_CHARACTER);
        assert_eq!(export.final_level, Level::new(3));
        assert!(export.levels.is_empty());
    }

    #[test]
    fn test_final_level_is_max() {
        let meta = CharacterMeta { name: "Ash".into(), level: Level::new(2) };
        let export = BuildExport::new(&meta, &history_at(&[1, 5]));
        assert_eq!(export.final_level, Level::new(5));

        let meta = CharacterMeta { name: "Ash".into(), level: Level::new(8) };
        let export = BuildExport::new(&meta, &history_at(&[1, 5]));
        assert_eq!(export.final_level, Level::new(8));
    }

    #[test]
    fn test_json_shape() {
        let meta = CharacterMeta { name: "Ash".into(), level: Level::new(3) };
        let bytes = BuildExport::new(&meta, &history_at(&[1, 3])).to_json_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["name"], "Ash");
        assert_eq!(json["finalLevel"], 3);
        let keys: Vec<_> = json["levels"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["1", "3"]);
        assert_eq!(json["levels"]["3"]["level"], 3);
    }

    #[test]
    fn test_file_name() {
        let named = |name: &str| {
            let meta = CharacterMeta { name: name.into(), level: Level::MIN };
            BuildExport::new(&meta, &LevelHistory::new()).file_name()
        };
        assert_eq!(named("Ash"), "ash_build.json");
        assert_eq!(named("  Mira  Dawnsworn "), "mira_dawnsworn_build.json");
        assert_eq!(named(""), "unnamed_character_build.json");
        assert_eq!(named("!!!"), "unnamed_character_build.json");
    }
}
