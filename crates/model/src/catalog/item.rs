use crate::{
    core::{identifiers::ObjectId, value::Value},
    error::ModelError,
};
use serde::{Deserialize, Serialize};

pub const FIELD_ID: &str = "_id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_IMAGE_URI: &str = "imageURI";
pub const FIELD_QUANTITY: &str = "quantity";
pub const FIELD_BRAND: &str = "brand";
pub const FIELD_USERNAME: &str = "user.username";
pub const FIELD_EMAIL: &str = "user.email";

/// Rejects prices that ascending keyset scans could never reach.
pub fn validate_price(price: f64) -> Result<(), ModelError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidPrice(price.to_string()))
    }
}

/// The account selling an item and how to reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub username: String,
    pub email: String,
}

/// A catalog listing that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub description: String,
    /// Category tags; an item may belong to several.
    pub category: Vec<String>,
    #[serde(rename = "imageURI")]
    pub image_uri: String,
    pub quantity: u32,
    pub brand: String,
    pub user: Seller,
}

impl NewItem {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_price(self.price)
    }
}

/// A stored catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: Vec<String>,
    #[serde(rename = "imageURI")]
    pub image_uri: String,
    pub quantity: u32,
    pub brand: String,
    pub user: Seller,
}

impl Item {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_price(self.price)
    }

    pub fn from_new(id: ObjectId, new: NewItem) -> Self {
        Item {
            id,
            name: new.name,
            price: new.price,
            description: new.description,
            category: new.category,
            image_uri: new.image_uri,
            quantity: new.quantity,
            brand: new.brand,
            user: new.user,
        }
    }

    /// Looks up a field by its document name. Unknown fields read as `Null`.
    pub fn field(&self, name: &str) -> Value {
        match name {
            FIELD_ID => Value::Id(self.id),
            FIELD_NAME => Value::String(self.name.clone()),
            FIELD_PRICE => Value::Float(self.price),
            FIELD_DESCRIPTION => Value::String(self.description.clone()),
            FIELD_CATEGORY => Value::StringArray(self.category.clone()),
            FIELD_IMAGE_URI => Value::String(self.image_uri.clone()),
            FIELD_QUANTITY => Value::Uint(self.quantity as u64),
            FIELD_BRAND => Value::String(self.brand.clone()),
            FIELD_USERNAME => Value::String(self.user.username.clone()),
            FIELD_EMAIL => Value::String(self.user.email.clone()),
            _ => Value::Null,
        }
    }
}

impl From<Item> for NewItem {
    fn from(item: Item) -> Self {
        NewItem {
            name: item.name,
            price: item.price,
            description: item.description,
            category: item.category,
            image_uri: item.image_uri,
            quantity: item.quantity,
            brand: item.brand,
            user: item.user,
        }
    }
}
