use serde::{Deserialize, Serialize};

/// A person as stored and rendered.
///
/// Managed by a [`ResourceStore`](crate::store::ResourceStore) through the
/// [`StoredEntity`](crate::store::StoredEntity) impl in [`entity`](super::entity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub age: u32,
}

/// Payload for inserting and updating a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    pub name: String,
    pub age: u32,
}

impl PersonInput {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub number: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(number: u64, size: u64) -> Self {
        Self { number, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { number: 0, size: 20 }
    }
}

/// One slice of all persons, plus what is needed to describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub request: PageRequest,
    pub total_elements: u64,
}
