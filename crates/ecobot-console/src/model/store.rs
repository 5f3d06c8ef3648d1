#![forbid(unsafe_code)]

//! Ordered, id-addressed collections backing each screen's view state.
//!
//! Every mutation goes through [`Collection`] so duplicate ids are rejected
//! at the door and missing ids surface as typed errors instead of silent
//! no-ops.

use std::fmt;

/// Implemented by every entity that lives in a [`Collection`].
pub trait HasId {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An item with this id is already present.
    DuplicateId(String),
    /// No item with this id exists.
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate id: {id}"),
            Self::NotFound(id) => write!(f, "no item with id: {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Insertion-ordered collection addressed by string id.
#[derive(Debug, Clone, Default)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: HasId> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Seed a collection, panicking on duplicate ids. Only for the
    /// hardcoded sample catalog, which is validated by tests.
    pub fn from_items(items: Vec<T>) -> Self {
        let mut collection = Self::new();
        for item in items {
            if collection.contains(item.id()) {
                unreachable!("sample catalog contains duplicate ids");
            }
            collection.items.push(item);
        }
        collection
    }

    pub fn add(&mut self, item: T) -> Result<(), StoreError> {
        if self.contains(item.id()) {
            return Err(StoreError::DuplicateId(item.id().to_string()));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<T, StoreError> {
        match self.items.iter().position(|item| item.id() == id) {
            Some(idx) => Ok(self.items.remove(idx)),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Apply `f` to the item with the given id.
    pub fn update<F>(&mut self, id: &str, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut T),
    {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        value: u32,
    }

    impl HasId for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.into(),
            value,
        }
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut c = Collection::new();
        c.add(item("1", 10)).expect("first add");
        let err = c.add(item("1", 20)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("1".into()));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn remove_returns_item_and_preserves_order() {
        let mut c = Collection::from_items(vec![item("1", 1), item("2", 2), item("3", 3)]);
        let removed = c.remove("2").expect("remove");
        assert_eq!(removed.value, 2);
        let ids: Vec<&str> = c.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn remove_missing_id_is_not_found() {
        let mut c: Collection<Item> = Collection::new();
        assert_eq!(
            c.remove("nope").unwrap_err(),
            StoreError::NotFound("nope".into())
        );
    }

    #[test]
    fn update_mutates_in_place() {
        let mut c = Collection::from_items(vec![item("1", 1)]);
        c.update("1", |i| i.value = 99).expect("update");
        assert_eq!(c.get("1").map(|i| i.value), Some(99));
        assert!(c.update("missing", |i| i.value = 0).is_err());
    }
}
