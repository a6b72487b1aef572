use crate::domain::ports::{Entity, EntityId, QuantityBearing};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ElectronicItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: u32,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: u32,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GroceryItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: u32,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: EntityId, name: impl Into<String>, quantity: u32, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }
}

/// A stock record persisted by the inventory logger.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct InventoryItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: u32,
    pub date_added: NaiveDate,
}

impl InventoryItem {
    pub fn new(id: EntityId, name: impl Into<String>, quantity: u32, date_added: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

/// Short human-readable description used in listings.
pub trait Describe {
    fn describe(&self) -> String;
}

impl Describe for ElectronicItem {
    fn describe(&self) -> String {
        format!(
            "[{}] {} ({}) - Qty: {}, Warranty: {} months",
            self.id, self.name, self.brand, self.quantity, self.warranty_months
        )
    }
}

impl Describe for GroceryItem {
    fn describe(&self) -> String {
        format!(
            "[{}] {} - Qty: {}, Expires: {}",
            self.id, self.name, self.quantity, self.expiry_date
        )
    }
}

impl Describe for InventoryItem {
    fn describe(&self) -> String {
        format!(
            "[{}] {} - Qty: {}, Added: {}",
            self.id, self.name, self.quantity, self.date_added
        )
    }
}

macro_rules! stock_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> EntityId {
                    self.id
                }
            }

            impl QuantityBearing for $ty {
                fn quantity(&self) -> u32 {
                    self.quantity
                }

                fn set_quantity(&mut self, quantity: u32) {
                    self.quantity = quantity;
                }
            }
        )+
    };
}

stock_entity!(ElectronicItem, GroceryItem, InventoryItem);
