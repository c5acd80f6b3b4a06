//! Add/edit form input

use serde::Deserialize;
use validator::Validate;

use super::model::{ItemFields, MAX_TEXT_LEN};
use crate::core::error::{AppError, AppResult};

/// Raw urlencoded body of the add and edit forms.
///
/// Every field is optional here so that an omitted key becomes
/// [`AppError::MissingField`] instead of a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ItemForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub mac_address: Option<String>,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub description: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> AppResult<String> {
    value.ok_or(AppError::MissingField(field))
}

fn parse_price(raw: &str) -> AppResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(AppError::InvalidPrice(raw.to_string())),
    }
}

impl TryFrom<ItemForm> for ItemFields {
    type Error = AppError;

    fn try_from(form: ItemForm) -> AppResult<Self> {
        let name = required(form.name, "name")?;
        let price = required(form.price, "price")?;
        let mac_address = required(form.mac_address, "mac_address")?;
        let serial_number = required(form.serial_number, "serial_number")?;
        let manufacturer = required(form.manufacturer, "manufacturer")?;
        let description = required(form.description, "description")?;

        let fields = ItemFields {
            name,
            price: parse_price(&price)?,
            mac_address,
            serial_number,
            manufacturer,
            description,
        };
        check_lengths(&fields)?;
        Ok(fields)
    }
}

/// Rejects values that would not fit the `VARCHAR(100)` columns.
pub fn check_lengths(fields: &ItemFields) -> AppResult<()> {
    fields.validate().map_err(|errors| {
        let mut names: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        names.sort();
        AppError::FieldTooLong {
            field: names.join(", "),
            max: MAX_TEXT_LEN,
        }
    })
}
