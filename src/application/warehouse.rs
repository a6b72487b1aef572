use crate::domain::inventory::{Describe, ElectronicItem, GroceryItem};
use crate::domain::ports::{Entity, EntityId, QuantityBearing};
use crate::error::{Result, StoreError};
use crate::infrastructure::in_memory::EntityRepository;
use chrono::NaiveDate;

/// Keeps electronics and groceries in two separate repositories.
#[derive(Default)]
pub struct WarehouseManager {
    pub electronics: EntityRepository<ElectronicItem>,
    pub groceries: EntityRepository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_data(&mut self) -> Result<()> {
        self.electronics
            .add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))?;
        self.electronics
            .add(ElectronicItem::new(2, "Phone", 15, "Samsung", 12))?;
        self.electronics
            .add(ElectronicItem::new(3, "Headphones", 25, "Sony", 6))?;

        let expires = |m, d| NaiveDate::from_ymd_opt(2026, m, d).unwrap_or_default();
        self.groceries
            .add(GroceryItem::new(1, "Rice", 50, expires(12, 31)))?;
        self.groceries
            .add(GroceryItem::new(2, "Milk", 30, expires(3, 15)))?;
        self.groceries
            .add(GroceryItem::new(3, "Bread", 20, expires(2, 10)))?;
        Ok(())
    }

    pub fn item_lines<T: Entity + Describe>(repo: &EntityRepository<T>) -> Vec<String> {
        repo.iter().map(Describe::describe).collect()
    }

    /// Adds `delta` to the stock of item `id` and returns the new quantity.
    ///
    /// Best effort: a missing item, a resulting negative quantity, or a delta
    /// that overflows is logged and yields `None` instead of an error.
    pub fn increase_stock<T>(repo: &mut EntityRepository<T>, id: EntityId, delta: i64) -> Option<u32>
    where
        T: Entity + QuantityBearing,
    {
        let result = repo
            .get_by_id(id)
            .and_then(|item| {
                i64::from(item.quantity())
                    .checked_add(delta)
                    .ok_or(StoreError::InvalidQuantity(delta))
            })
            .and_then(|target| {
                repo.update_quantity(id, target)?;
                Ok(target)
            });
        match result {
            Ok(target) => u32::try_from(target).ok(),
            Err(e) => {
                tracing::warn!(id, delta, "stock update skipped: {}", e);
                None
            }
        }
    }

    /// Removes item `id`, logging instead of failing when it is absent.
    pub fn remove_item<T: Entity>(repo: &mut EntityRepository<T>, id: EntityId) -> Option<T> {
        match repo.remove(id) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(id, "removal skipped: {}", e);
                None
            }
        }
    }

    /// Triggers one of each failure kind against the seeded data and returns
    /// the resulting messages. None of them alter the stored items.
    pub fn run_error_scenarios(&mut self) -> Vec<String> {
        let mut messages = Vec::new();

        if let Err(e) = self
            .electronics
            .add(ElectronicItem::new(1, "Tablet", 5, "Lenovo", 12))
        {
            messages.push(format!("Error: {e}"));
        }
        if let Err(e) = self.groceries.remove(99) {
            messages.push(format!("Error: {e}"));
        }
        if let Err(e) = self.electronics.update_quantity(1, -10) {
            messages.push(format!("Error: {e}"));
        }

        for message in &messages {
            tracing::debug!("{}", message);
        }
        messages
    }

    /// Seeds and lists both repositories, applies best-effort stock changes,
    /// then runs the failure scenarios.
    pub fn run(&mut self) -> Result<Vec<String>> {
        self.seed_data()?;

        let mut lines = vec!["Grocery Items:".to_string()];
        lines.extend(Self::item_lines(&self.groceries));
        lines.push("Electronic Items:".to_string());
        lines.extend(Self::item_lines(&self.electronics));
        lines.push("Stock Updates:".to_string());
        for (id, delta) in [(1, 10), (99, 5)] {
            let line = match Self::increase_stock(&mut self.groceries, id, delta) {
                Some(quantity) => format!("Grocery {id}: stock now {quantity}"),
                None => format!("Grocery {id}: stock unchanged"),
            };
            lines.push(line);
        }
        lines.push("Removals:".to_string());
        for id in [3, 99] {
            let line = match Self::remove_item(&mut self.electronics, id) {
                Some(item) => format!("Removed electronic {id} ({})", item.name),
                None => format!("Electronic {id}: nothing to remove"),
            };
            lines.push(line);
        }
        lines.push("Error Scenarios:".to_string());
        lines.extend(self.run_error_scenarios());
        Ok(lines)
    }
}
