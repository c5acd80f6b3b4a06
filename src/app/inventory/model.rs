//! Inventory data model

use std::fmt;

use validator::Validate;

/// Length limit shared by the bounded text columns of the `inventory` table.
pub const MAX_TEXT_LEN: u64 = 100;

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub mac_address: String,
    pub serial_number: String,
    pub manufacturer: String,
    pub description: String,
}

/// The user-editable columns of an [`Item`].
///
/// `create` and `update` always take a full set: there is no partial update.
/// The `max = 100` limits below are [`MAX_TEXT_LEN`]; `test_column_limits`
/// pins them together.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ItemFields {
    #[validate(length(max = 100))]
    pub name: String,
    pub price: f64,
    #[validate(length(max = 100))]
    pub mac_address: String,
    #[validate(length(max = 100))]
    pub serial_number: String,
    #[validate(length(max = 100))]
    pub manufacturer: String,
    pub description: String,
}

impl Item {
    pub fn from_fields(id: i32, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            mac_address: fields.mac_address,
            serial_number: fields.serial_number,
            manufacturer: fields.manufacturer,
            description: fields.description,
        }
    }

    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            price: self.price,
            mac_address: self.mac_address.clone(),
            serial_number: self.serial_number.clone(),
            manufacturer: self.manufacturer.clone(),
            description: self.description.clone(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Inventory {}>", self.name)
    }
}
