use crate::db::DbResult;
use crate::db::error::DbError;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Number of slots on the sheet. Inventories are always exactly this long.
pub const INVENTORY_SIZE: usize = 6;

/// Display name of an unfilled slot.
pub const EMPTY_SLOT_NAME: &str = "Empty";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Item identifier (empty for placeholder slots)
    pub id: String,
    /// Display name ("Empty" for unfilled slots)
    pub name: String,
    /// Stack size
    pub quantity: u32,
}

impl InventoryItem {
    /// The sentinel that fills slots no real item occupies.
    pub fn placeholder() -> Self {
        Self {
            id: String::new(),
            name: EMPTY_SLOT_NAME.to_string(),
            quantity: 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty()
    }

    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            quantity: row
                .try_get::<_, i32>("quantity")?
                .try_into()
                .map_err(|_| DbError::Decode("quantity < 0".into()))?,
        })
    }
}

/// Normalize a fetched or cached sequence to exactly `INVENTORY_SIZE`
/// slots: truncate overflow, pad the tail with placeholders, keep the
/// original order.
pub fn normalize_slots(mut items: Vec<InventoryItem>) -> Vec<InventoryItem> {
    items.truncate(INVENTORY_SIZE);
    while items.len() < INVENTORY_SIZE {
        items.push(InventoryItem::placeholder());
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: usize) -> InventoryItem {
        InventoryItem {
            id: format!("item-{n}"),
            name: format!("Item {n}"),
            quantity: n as u32,
        }
    }

    #[test]
    fn t_normalize_any_length() {
        for len in 0..=10 {
            let input: Vec<_> = (0..len).map(item).collect();
            let normalized = normalize_slots(input.clone());

            assert_eq!(normalized.len(), INVENTORY_SIZE);

            let kept = len.min(INVENTORY_SIZE);
            assert_eq!(&normalized[..kept], &input[..kept]);
            for slot in &normalized[kept..] {
                assert_eq!(*slot, InventoryItem::placeholder());
            }
        }
    }

    #[test]
    fn t_placeholder_shape() {
        let slot = InventoryItem::placeholder();
        assert_eq!(slot.id, "");
        assert_eq!(slot.name, "Empty");
        assert_eq!(slot.quantity, 0);
        assert!(slot.is_placeholder());
        assert!(!item(1).is_placeholder());
    }

    #[test]
    fn t_normalize_is_idempotent() {
        let once = normalize_slots(vec![item(1), item(2)]);
        let twice = normalize_slots(once.clone());
        assert_eq!(once, twice);
    }
}
