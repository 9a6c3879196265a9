use serde::{Deserialize, Serialize};
use time::Date;

use crate::store::data::FridgeItem;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub cost: f64,
    #[serde(default = "full_percentage")]
    pub percentage_left: f64,
    #[serde(default)]
    pub expiration_date: Option<Date>,
}

fn full_percentage() -> f64 {
    100.0
}

/// Full replacement of the editable fields.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: String,
    pub cost: f64,
    pub percentage_left: f64,
    #[serde(default)]
    pub expiration_date: Option<Date>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedItemResponse {
    pub item: FridgeItem,
    /// True when the update drove the percentage to zero and the item left the fridge.
    pub removed: bool,
}
