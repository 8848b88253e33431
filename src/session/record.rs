//! The persisted session record.
//!
//! Serialized as JSON under a fixed storage key, with the original
//! camelCase field names so records written by earlier builds of the game
//! stay readable. Loading is version-gated: any mismatch or parse failure
//! resets to defaults instead of crashing on an incompatible shape.

use serde::{Deserialize, Serialize};

use crate::session::store::SessionStore;

/// Cross-reload game progress. Mutated only by the session controller and
/// persisted after every mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session format version; gate for stale persisted records.
    pub app_version: String,

    /// Turns taken in the current round.
    pub turns: u32,

    /// Turns taken across all rounds of this playthrough.
    pub total_turns: u32,

    /// Whether the current round has been won.
    pub game_win: bool,

    /// Active generation ordinal, `1..=total_generations`.
    pub gen: u8,

    /// Audio muted?
    pub mute: bool,

    /// Chosen difficulty (mirrors the board size; 0 = unset).
    pub difficulty: usize,

    /// Chosen board size in cards (0 = unset, awaiting player choice).
    pub board_size: usize,

    /// Round start, milliseconds since the Unix epoch (0 = no round yet).
    pub start_time: u64,

    /// Remaining power-up uses.
    pub power_ups: u32,
}

impl Session {
    /// Fresh defaults for a given session format version.
    #[must_use]
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            app_version: version.into(),
            turns: 0,
            total_turns: 0,
            game_win: false,
            gen: 1,
            mute: false,
            difficulty: 0,
            board_size: 0,
            start_time: 0,
            power_ups: 0,
        }
    }
}

/// Load the session from storage, falling back to defaults.
///
/// Defaults are returned - and stale storage cleared - when the stored
/// record is absent, unparseable (e.g. a field was added since it was
/// written), or carries a different `appVersion`.
pub fn load_session(store: &mut dyn SessionStore, key: &str, version: &str) -> Session {
    let Some(raw) = store.get(key) else {
        return Session::with_version(version);
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(session) if session.app_version == version => session,
        Ok(session) => {
            tracing::warn!(
                stored = %session.app_version,
                current = %version,
                "session format changed, resetting"
            );
            store.clear();
            Session::with_version(version)
        }
        Err(err) => {
            tracing::warn!(%err, "stored session unreadable, resetting");
            store.clear();
            Session::with_version(version)
        }
    }
}

/// Persist the session to storage.
///
/// Serialization of a plain record cannot realistically fail; if it ever
/// does, the error is logged and the previous stored value stays in place.
pub fn save_session(store: &mut dyn SessionStore, key: &str, session: &Session) {
    match serde_json::to_string(session) {
        Ok(raw) => store.set(key, &raw),
        Err(err) => tracing::error!(%err, "failed to serialize session"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemoryStore;

    const KEY: &str = "gameState";
    const VERSION: &str = "1.5";

    #[test]
    fn test_defaults() {
        let session = Session::with_version(VERSION);

        assert_eq!(session.app_version, "1.5");
        assert_eq!(session.gen, 1);
        assert_eq!(session.turns, 0);
        assert_eq!(session.total_turns, 0);
        assert!(!session.game_win);
        assert!(!session.mute);
        assert_eq!(session.board_size, 0);
        assert_eq!(session.power_ups, 0);
    }

    #[test]
    fn test_camel_case_field_names() {
        let session = Session::with_version(VERSION);
        let json = serde_json::to_string(&session).unwrap();

        for field in [
            "appVersion",
            "totalTurns",
            "gameWin",
            "boardSize",
            "startTime",
            "powerUps",
        ] {
            assert!(json.contains(field), "missing field {field} in {json}");
        }
    }

    #[test]
    fn test_load_absent_returns_defaults() {
        let mut store = MemoryStore::default();
        let session = load_session(&mut store, KEY, VERSION);
        assert_eq!(session, Session::with_version(VERSION));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut store = MemoryStore::default();

        let mut session = Session::with_version(VERSION);
        session.gen = 4;
        session.total_turns = 88;
        session.mute = true;
        session.power_ups = 2;

        save_session(&mut store, KEY, &session);
        assert_eq!(load_session(&mut store, KEY, VERSION), session);
    }

    #[test]
    fn test_version_mismatch_resets() {
        let mut store = MemoryStore::default();

        let mut stale = Session::with_version("1.4");
        stale.gen = 7;
        save_session(&mut store, KEY, &stale);

        let loaded = load_session(&mut store, KEY, VERSION);
        assert_eq!(loaded, Session::with_version(VERSION));
        assert!(store.get(KEY).is_none(), "stale record cleared");
    }

    #[test]
    fn test_unparseable_record_resets() {
        let mut store = MemoryStore::default();

        // A record from a build that predates powerUps.
        store.set(
            KEY,
            r#"{"appVersion":"1.5","turns":3,"totalTurns":3,"gameWin":false,"gen":2,"mute":false,"difficulty":12,"boardSize":12,"startTime":1000}"#,
        );

        let loaded = load_session(&mut store, KEY, VERSION);
        assert_eq!(loaded, Session::with_version(VERSION));
        assert!(store.get(KEY).is_none());
    }

    #[test]
    fn test_garbage_record_resets() {
        let mut store = MemoryStore::default();
        store.set(KEY, "not json at all");

        let loaded = load_session(&mut store, KEY, VERSION);
        assert_eq!(loaded, Session::with_version(VERSION));
    }
}
