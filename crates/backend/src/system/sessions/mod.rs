//! Explicit session context.
//!
//! A session is created on login and destroyed on logout. The store lives in
//! the router state and is passed to handlers; there is no process-wide
//! session global.

use chrono::{DateTime, Duration, Utc};
use contracts::system::auth::{UserInfo, UserRole};
use contracts::system::settings::UserSettings;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Per-login context handed to every authenticated handler
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub login_at: DateTime<Utc>,
    pub settings: UserSettings,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            username: self.username.clone(),
            role: self.role,
            is_admin: self.is_admin(),
            login_at: self.login_at,
        }
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, username: &str, role: UserRole) -> Session {
        let is_admin = role == UserRole::Admin;
        let session = Session {
            id: Uuid::new_v4(),
            username: username.to_string(),
            role,
            login_at: Utc::now(),
            settings: UserSettings::default_for(is_admin),
        };
        self.write().insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: &Uuid) -> Option<Session> {
        self.read().get(id).cloned()
    }

    /// Returns false when the session did not exist
    pub fn destroy(&self, id: &Uuid) -> bool {
        self.write().remove(id).is_some()
    }

    /// Apply `update` to the session's settings and return the result
    pub fn update_settings<F>(&self, id: &Uuid, update: F) -> Option<UserSettings>
    where
        F: FnOnce(&mut UserSettings),
    {
        let mut sessions = self.write();
        let session = sessions.get_mut(id)?;
        update(&mut session.settings);
        Some(session.settings.clone())
    }

    /// Drop sessions whose tokens can no longer be valid
    pub fn purge_older_than(&self, max_age: Duration) -> usize {
        let cutoff = Utc::now() - max_age;
        let mut sessions = self.write();
        let before = sessions.len();
        sessions.retain(|_, s| s.login_at > cutoff);
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Session>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Session>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::settings::Theme;

    #[test]
    fn test_create_and_destroy() {
        let store = SessionStore::new();
        let session = store.create("admin", UserRole::Admin);
        assert!(session.is_admin());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&session.id).unwrap().username, "admin");

        assert!(store.destroy(&session.id));
        assert!(store.get(&session.id).is_none());
        assert!(!store.destroy(&session.id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let a = store.create("admin", UserRole::Admin);
        let b = store.create("user", UserRole::User);

        store.update_settings(&a.id, |s| s.display.theme = Theme::Dark);

        assert_eq!(store.get(&a.id).unwrap().settings.display.theme, Theme::Dark);
        assert_eq!(store.get(&b.id).unwrap().settings.display.theme, Theme::Light);
        assert!(store.get(&b.id).unwrap().settings.advanced.is_none());
    }

    #[test]
    fn test_update_missing_session() {
        let store = SessionStore::new();
        assert!(store.update_settings(&Uuid::new_v4(), |_| {}).is_none());
    }

    #[test]
    fn test_purge() {
        let store = SessionStore::new();
        store.create("user", UserRole::User);
        assert_eq!(store.purge_older_than(Duration::hours(1)), 0);
        assert_eq!(store.purge_older_than(Duration::seconds(-1)), 1);
        assert!(store.is_empty());
    }
}
