use serde::Serialize;
use tracing::debug;

use crate::types::{Animal, Fly};

/// Ordered, append-only collection of animals
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Registry {
    animals: Vec<Animal>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with one animal of each kind
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        registry.add(Animal::dog("Rex", 3, Some("Shepherd".to_string())));
        registry.add(Animal::cat("Milo", 2, true));
        registry.add(Animal::bird("Kiwi", 1, 28));
        registry
    }

    pub fn add(&mut self, animal: Animal) {
        debug!(
            kind = %animal.kind(),
            name = animal.name(),
            index = self.animals.len(),
            "animal added"
        );
        self.animals.push(animal);
    }

    /// All animals in insertion order
    pub fn all(&self) -> &[Animal] {
        &self.animals
    }

    /// Animals that can fly, in insertion order
    pub fn flyers(&self) -> Vec<&dyn Fly> {
        self.animals.iter().filter_map(Animal::as_flyer).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Animal> {
        self.animals.get(index)
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}
