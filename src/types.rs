use std::fmt;

use serde::Serialize;

/// Variant tag enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Dog,
    Cat,
    Bird,
}

impl AnimalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalKind::Dog => "Dog",
            AnimalKind::Cat => "Cat",
            AnimalKind::Bird => "Bird",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flight capability. Only variants that can fly implement it.
pub trait Fly {
    fn fly(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dog {
    pub name: String,
    pub age: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u8, breed: Option<String>) -> Self {
        Self {
            name: name.into(),
            age,
            breed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    pub name: String,
    pub age: u8,
    pub is_indoor: bool,
}

impl Cat {
    pub fn new(name: impl Into<String>, age: u8, is_indoor: bool) -> Self {
        Self {
            name: name.into(),
            age,
            is_indoor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bird {
    pub name: String,
    pub age: u8,
    pub wingspan_cm: u16,
}

impl Bird {
    pub fn new(name: impl Into<String>, age: u8, wingspan_cm: u16) -> Self {
        Self {
            name: name.into(),
            age,
            wingspan_cm,
        }
    }
}

impl Fly for Bird {
    fn fly(&self) -> String {
        format!("{} spreads {}cm wings and takes off!", self.name, self.wingspan_cm)
    }
}

/// A single animal record. The variant is fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Animal {
    Dog(Dog),
    Cat(Cat),
    Bird(Bird),
}

impl Animal {
    pub fn dog(name: impl Into<String>, age: u8, breed: Option<String>) -> Self {
        Animal::Dog(Dog::new(name, age, breed))
    }

    pub fn cat(name: impl Into<String>, age: u8, is_indoor: bool) -> Self {
        Animal::Cat(Cat::new(name, age, is_indoor))
    }

    pub fn bird(name: impl Into<String>, age: u8, wingspan_cm: u16) -> Self {
        Animal::Bird(Bird::new(name, age, wingspan_cm))
    }

    pub fn kind(&self) -> AnimalKind {
        match self {
            Animal::Dog(_) => AnimalKind::Dog,
            Animal::Cat(_) => AnimalKind::Cat,
            Animal::Bird(_) => AnimalKind::Bird,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Animal::Dog(d) => &d.name,
            Animal::Cat(c) => &c.name,
            Animal::Bird(b) => &b.name,
        }
    }

    pub fn age(&self) -> u8 {
        match self {
            Animal::Dog(d) => d.age,
            Animal::Cat(c) => c.age,
            Animal::Bird(b) => b.age,
        }
    }

    pub fn speak(&self) -> &'static str {
        match self {
            Animal::Dog(_) => "Woof!",
            Animal::Cat(_) => "Meow~",
            Animal::Bird(_) => "Chirp!",
        }
    }

    /// How the animal gets around
    pub fn moves(&self) -> &'static str {
        match self {
            Animal::Dog(_) => "runs on four legs",
            Animal::Cat(_) => "sneaks gracefully",
            Animal::Bird(_) => "hops and flutters",
        }
    }

    /// Borrow the animal as a flyer, if its variant can fly
    pub fn as_flyer(&self) -> Option<&dyn Fly> {
        match self {
            Animal::Bird(b) => Some(b),
            Animal::Dog(_) | Animal::Cat(_) => None,
        }
    }

    /// Variant-specific column used by listings
    pub fn extra(&self) -> String {
        match self {
            Animal::Dog(d) => format!("Breed={}", d.breed.as_deref().unwrap_or("—")),
            Animal::Cat(c) => format!("Indoor={}", c.is_indoor),
            Animal::Bird(b) => format!("Wingspan={}cm", b.wingspan_cm),
        }
    }

    /// Display label, e.g. "Dog Rex, Age 3"
    pub fn label(&self) -> String {
        format!("{} {}, Age {}", self.kind(), self.name(), self.age())
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoo() -> Vec<Animal> {
        vec![
            Animal::dog("Rex", 3, None),
            Animal::cat("Milo", 2, true),
            Animal::bird("Kiwi", 1, 28),
        ]
    }

    // ============== Behavior Tests ==============

    #[test]
    fn test_speak_is_fixed_per_variant() {
        let speech: Vec<_> = zoo().iter().map(Animal::speak).collect();
        assert_eq!(speech, vec!["Woof!", "Meow~", "Chirp!"]);
    }

    #[test]
    fn test_speak_ignores_fields() {
        assert_eq!(Animal::dog("A", 0, Some("Pug".into())).speak(), "Woof!");
        assert_eq!(Animal::dog("Other", 100, None).speak(), "Woof!");
        assert_eq!(Animal::cat("C", 9, false).speak(), "Meow~");
        assert_eq!(Animal::bird("B", 50, 300).speak(), "Chirp!");
    }

    #[test]
    fn test_moves_is_fixed_per_variant() {
        let moves: Vec<_> = zoo().iter().map(Animal::moves).collect();
        assert_eq!(
            moves,
            vec!["runs on four legs", "sneaks gracefully", "hops and flutters"]
        );
    }

    #[test]
    fn test_only_birds_fly() {
        let zoo = zoo();
        assert!(zoo[0].as_flyer().is_none());
        assert!(zoo[1].as_flyer().is_none());
        assert!(zoo[2].as_flyer().is_some());
    }

    #[test]
    fn test_fly_mentions_name_and_wingspan() {
        let text = Bird::new("Kiwi", 1, 28).fly();
        assert!(text.contains("Kiwi"));
        assert!(text.contains("28"));
        assert_eq!(text, "Kiwi spreads 28cm wings and takes off!");
    }

    // ============== Display Tests ==============

    #[test]
    fn test_label() {
        assert_eq!(Animal::dog("Rex", 3, None).label(), "Dog Rex, Age 3");
        assert_eq!(Animal::cat("Milo", 2, true).to_string(), "Cat Milo, Age 2");
        assert_eq!(Animal::bird("Kiwi", 1, 28).to_string(), "Bird Kiwi, Age 1");
    }

    #[test]
    fn test_missing_breed_uses_placeholder() {
        let extra = Animal::dog("Rex", 3, None).extra();
        assert_eq!(extra, "Breed=—");
        assert!(!extra.contains("null"));
    }

    #[test]
    fn test_extra_columns() {
        assert_eq!(Animal::dog("Rex", 3, Some("Shepherd".into())).extra(), "Breed=Shepherd");
        assert_eq!(Animal::cat("Milo", 2, true).extra(), "Indoor=true");
        assert_eq!(Animal::bird("Kiwi", 1, 28).extra(), "Wingspan=28cm");
    }

    // ============== Field Tests ==============

    #[test]
    fn test_kind_is_fixed_at_creation() {
        let kinds: Vec<_> = zoo().iter().map(Animal::kind).collect();
        assert_eq!(kinds, vec![AnimalKind::Dog, AnimalKind::Cat, AnimalKind::Bird]);
    }

    // ============== Serialization Tests ==============

    #[test]
    fn test_json_is_tagged_by_type() {
        let value = serde_json::to_value(Animal::cat("Milo", 2, true)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "cat", "name": "Milo", "age": 2, "isIndoor": true})
        );
    }

    #[test]
    fn test_json_omits_missing_breed() {
        let value = serde_json::to_value(Animal::dog("Rex", 3, None)).unwrap();
        assert_eq!(value, serde_json::json!({"type": "dog", "name": "Rex", "age": 3}));
    }
}
