//! Bridges the session flag to `eframe`'s persistence.
//!
//! `eframe::Storage` is only reachable at startup and in `App::save`, so the session keeps its
//! own in-memory copy which is seeded here and written back on save. A removed key is written
//! as an empty string, which the session reads as absent.

use userdesk_business::{LOGIN_KEY, MemoryStorage, Session, SessionStorage, TOKEN_KEY};

const SESSION_KEYS: [&str; 2] = [LOGIN_KEY, TOKEN_KEY];

pub fn load_session(storage: Option<&dyn eframe::Storage>) -> Session {
    let mut memory = MemoryStorage::default();
    if let Some(storage) = storage {
        for key in SESSION_KEYS {
            if let Some(value) = storage.get_string(key) {
                memory.set(key, &value);
            }
        }
    }
    Session::load(memory)
}

pub fn save_session(session: &Session, storage: &mut dyn eframe::Storage) {
    for key in SESSION_KEYS {
        let value = session.storage().get(key).unwrap_or_default();
        storage.set_string(key, value);
    }
}
