//! Gift List Manager
//!
//! Owns the ordered gift list and writes the whole list back to storage
//! after every mutation.

use crate::error::{GiftError, Result};
use crate::models::Gift;
use crate::storage::GiftStorage;

#[derive(Debug, Clone, PartialEq)]
pub struct GiftList<S> {
    gifts: Vec<Gift>,
    storage: S,
}

impl<S: GiftStorage> GiftList<S> {
    /// Hydrate from storage. Missing or malformed data yields an empty list.
    pub fn load(storage: S) -> Self {
        let gifts = match read_gifts(&storage) {
            Ok(gifts) => {
                log::debug!("[GIFTS] Loaded {} gifts", gifts.len());
                gifts
            }
            Err(e) => {
                log::warn!("[GIFTS] Ignoring stored gifts: {}", e);
                Vec::new()
            }
        };
        Self { gifts, storage }
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True if a gift with this name exists, ignoring case and surrounding whitespace
    pub fn contains_name(&self, name: &str) -> bool {
        self.gifts.iter().any(|g| g.same_name(name))
    }

    /// Check that `name` could be added (non-empty, not a duplicate)
    pub fn validate_name(&self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GiftError::EmptyName);
        }
        if self.contains_name(name) {
            return Err(GiftError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Append a gift. Name and URL are trimmed; rejected input leaves the list untouched.
    pub fn add(&mut self, name: &str, image_url: &str, quantity: i64) -> Result<()> {
        self.validate_name(name)?;
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(GiftError::InvalidQuantity)?;

        self.gifts.push(Gift::new(name.trim(), image_url.trim(), quantity));
        self.persist();
        Ok(())
    }

    /// Remove the gift at `index`
    pub fn remove(&mut self, index: usize) -> Result<Gift> {
        if index >= self.len() {
            return Err(GiftError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let removed = self.gifts.remove(index);
        self.persist();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.gifts.clear();
        self.persist();
    }

    // A failed write keeps the in-memory change; the session goes on.
    fn persist(&self) {
        if let Err(e) = write_gifts(&self.storage, &self.gifts) {
            log::error!("[GIFTS] Failed to save {} gifts: {}", self.len(), e);
        }
    }
}

fn read_gifts<S: GiftStorage>(storage: &S) -> Result<Vec<Gift>> {
    let gifts: Vec<Gift> = match storage.read()? {
        Some(raw) => serde_json::from_str(&raw)?,
        None => return Ok(Vec::new()),
    };
    check_loaded(&gifts)?;
    Ok(gifts)
}

/// Stored records must satisfy the same rules `add` enforces
fn check_loaded(gifts: &[Gift]) -> Result<()> {
    for (i, gift) in gifts.iter().enumerate() {
        if gift.name.trim().is_empty() {
            return Err(GiftError::EmptyName);
        }
        if gift.quantity == 0 {
            return Err(GiftError::InvalidQuantity);
        }
        if gifts[..i].iter().any(|g| g.same_name(&gift.name)) {
            return Err(GiftError::DuplicateName(gift.name.clone()));
        }
    }
    Ok(())
}

fn write_gifts<S: GiftStorage>(storage: &S, gifts: &[Gift]) -> Result<()> {
    let raw = serde_json::to_string(gifts)?;
    storage.write(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn list_with(names: &[&str]) -> GiftList<MemoryStorage> {
        let mut list = GiftList::load(MemoryStorage::default());
        for name in names {
            list.add(name, "", 1).unwrap();
        }
        list
    }

    fn reload(list: &GiftList<MemoryStorage>) -> Vec<Gift> {
        let raw = list.storage().value().unwrap();
        GiftList::load(MemoryStorage::with_value(&raw)).gifts().to_vec()
    }

    #[test]
    fn test_load_empty_storage() {
        let list = GiftList::load(MemoryStorage::default());
        assert!(list.is_empty());
        assert_eq!(list.storage().writes(), 0);
    }

    #[test]
    fn test_load_malformed_storage_is_empty() {
        for raw in [
            "not json",
            r#"{"gift":"x"}"#,
            r#"[{"gift":1}]"#,
            r#"[{"gift":"a","quantity":-2}]"#,
            r#"[{"gift":"a","url":"","quantity":0}]"#,
            r#"[{"gift":"   ","url":"","quantity":1}]"#,
            r#"[{"gift":"a","url":"","quantity":1},{"gift":"A","url":"x.jpg","quantity":2}]"#,
        ] {
            let list = GiftList::load(MemoryStorage::with_value(raw));
            assert!(list.is_empty(), "expected empty list for {raw}");
        }
    }

    #[test]
    fn test_load_existing_data() {
        let raw = r#"[{"gift":"Libro","url":"","quantity":2},{"gift":"Tren","url":"t.png","quantity":1}]"#;
        let list = GiftList::load(MemoryStorage::with_value(raw));
        assert_eq!(
            list.gifts(),
            &[Gift::new("Libro", "", 2), Gift::new("Tren", "t.png", 1)]
        );
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut list = list_with(&["Libro"]);
        list.add("  Pelota ", " p.jpg ", 4).unwrap();

        assert_eq!(list.gifts().last(), Some(&Gift::new("Pelota", "p.jpg", 4)));
        assert_eq!(reload(&list), list.gifts());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut list = list_with(&["Libro"]);
        let writes = list.storage().writes();

        assert!(matches!(list.add("   ", "", 1), Err(GiftError::EmptyName)));
        assert!(matches!(list.add("Tren", "", 0), Err(GiftError::InvalidQuantity)));
        assert!(matches!(list.add("Tren", "", -3), Err(GiftError::InvalidQuantity)));
        assert!(matches!(list.add("LIBRO", "x.jpg", 2), Err(GiftError::DuplicateName(_))));

        assert_eq!(list.gifts(), &[Gift::new("Libro", "", 1)]);
        assert_eq!(list.storage().writes(), writes);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = list_with(&["a", "b", "c", "d"]);
        let removed = list.remove(1).unwrap();

        assert_eq!(removed.name, "b");
        let names: Vec<_> = list.gifts().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
        assert_eq!(reload(&list), list.gifts());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = list_with(&["a"]);
        assert!(matches!(
            list.remove(1),
            Err(GiftError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut list = list_with(&["a", "b"]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.storage().value().as_deref(), Some("[]"));

        // Clearing an empty list still writes
        let mut empty = GiftList::load(MemoryStorage::default());
        empty.clear();
        assert_eq!(empty.storage().value().as_deref(), Some("[]"));
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut list = list_with(&[]);
        list.storage().set_fail_writes(true);
        list.add("Libro", "", 1).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.storage().value(), None);
    }

    #[test]
    fn test_bicycle_scenario() {
        let mut list = GiftList::load(MemoryStorage::default());
        list.add("Bicicleta", "", 1).unwrap();
        assert!(list.add("bicicleta", "x.jpg", 3).is_err());
        assert_eq!(list.gifts(), &[Gift::new("Bicicleta", "", 1)]);

        list.remove(0).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.storage().value().as_deref(), Some("[]"));
    }
}
