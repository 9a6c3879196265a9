use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// A tracked food item. Lives in the fridge until its remaining
/// percentage hits zero or the user removes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FridgeItem {
    pub id: Uuid,
    pub name: String,
    pub cost: f64,
    pub percentage_left: f64,
    pub expiration_date: Option<Date>,
    pub added_at: OffsetDateTime,
}

/// One ingredient of a meal. `item_name` is denormalized so a meal
/// stays displayable after the fridge item itself is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealIngredient {
    pub item_id: Uuid,
    pub item_name: String,
    pub percentage_used: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub date: Date,
    pub meal_type: Option<String>,
    pub ingredients: Vec<MealIngredient>,
    pub total_cost: f64,
    pub portions_cooked: u32,
    pub portions_left: u32,
    pub is_active: bool,
    pub is_planned: bool,
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingLine {
    pub name: String,
    pub final_price: f64,
}

/// A single receipt. Immutable after creation except for full replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingEvent {
    pub id: Uuid,
    pub date: Date,
    pub lines: Vec<ShoppingLine>,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub currency: String,
    pub expiration_warning_days: u32,
    /// Expected cost per meal type, keyed by the meal's `meal_type`.
    pub cost_baselines: BTreeMap<String, f64>,
    pub view_mode: String,
    pub api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "EUR".into(),
            expiration_warning_days: 3,
            cost_baselines: BTreeMap::new(),
            view_mode: "grid".into(),
            api_key: None,
        }
    }
}

/// The whole persisted state, serialized as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub items: Vec<FridgeItem>,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub shopping_events: Vec<ShoppingEvent>,
    #[serde(default)]
    pub settings: Settings,
}
