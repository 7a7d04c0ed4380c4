//! Insertion-ordered collection of pursuers.
//!
//! Membership is by value equality. Duplicates are allowed and removing an
//! absent pursuer does nothing.
use crate::pursuer::Pursuer;

/// Collection of active pursuers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnemyRegistry {
    enemies: Vec<Pursuer>,
}

impl EnemyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enemies: Vec::new(),
        }
    }

    /// Appends `pursuer`, even if an equal one is already present.
    pub fn add(&mut self, pursuer: Pursuer) {
        self.enemies.push(pursuer);
    }

    /// Removes the first pursuer equal to `pursuer`, returning it if found.
    pub fn remove(&mut self, pursuer: &Pursuer) -> Option<Pursuer> {
        let index = self.enemies.iter().position(|p| p == pursuer)?;
        Some(self.enemies.remove(index))
    }

    /// Number of registered pursuers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Whether the registry holds no pursuers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Pursuer> {
        self.enemies.iter()
    }
}
