//! User registry collaborator for enrichment
//!
//! Transforms that embed actor references never construct [`User`] entities
//! themselves; they forward the wire fragment to an injected registry and use
//! whatever entity comes back. Memoization and deduplication policy belong to
//! the registry, and any fault it raises propagates to the transform's caller
//! unchanged.

use std::collections::HashMap;

use crate::error::Result;

use super::types::{ApiUser, User};

/// Resolve-or-register a user entity from its wire fragment.
pub trait UserRegistry {
    fn resolve(&mut self, data: ApiUser) -> Result<User>;
}

/// A HashMap-backed registry that deduplicates users by id.
///
/// The first fragment seen for an id wins; later fragments for the same id
/// return the already-registered entity.
#[derive(Debug, Default)]
pub struct MemoryUserRegistry {
    users: HashMap<String, User>,
}

impl MemoryUserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Look up a previously registered user without registering anything.
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }
}

impl UserRegistry for MemoryUserRegistry {
    fn resolve(&mut self, data: ApiUser) -> Result<User> {
        let user = self
            .users
            .entry(data.id.clone())
            .or_insert_with(|| User::from(data));
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(id: &str, username: &str) -> ApiUser {
        ApiUser {
            id: id.to_string(),
            username: username.to_string(),
            global_name: None,
            bot: None,
        }
    }

    #[test]
    fn test_resolve_registers_unseen_user() {
        let mut registry = MemoryUserRegistry::new();
        let user = registry.resolve(fragment("1", "nia")).unwrap();
        assert_eq!(user.username, "nia");
        assert!(!user.bot);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_deduplicates_by_id() {
        let mut registry = MemoryUserRegistry::new();
        registry.resolve(fragment("1", "nia")).unwrap();
        let again = registry.resolve(fragment("1", "renamed")).unwrap();

        // First fragment wins; no second entity is registered.
        assert_eq!(again.username, "nia");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_does_not_register() {
        let registry = MemoryUserRegistry::new();
        assert!(registry.get("missing").is_none());
        assert!(registry.is_empty());
    }
}
