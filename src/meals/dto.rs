use serde::Deserialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct NewIngredient {
    pub item_id: Uuid,
    pub percentage_used: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub name: String,
    /// Defaults to today.
    #[serde(default)]
    pub date: Option<Date>,
    #[serde(default)]
    pub meal_type: Option<String>,
    pub ingredients: Vec<NewIngredient>,
    #[serde(default = "one_portion")]
    pub portions_cooked: u32,
    /// Planned meals consume their ingredients now, not when cooked.
    #[serde(default)]
    pub is_planned: bool,
}

fn one_portion() -> u32 {
    1
}

/// Cook a prior meal again with the same ingredient shares.
#[derive(Debug, Deserialize, Default)]
pub struct RecookMealRequest {
    #[serde(default)]
    pub date: Option<Date>,
    #[serde(default)]
    pub is_planned: bool,
    /// Defaults to the source meal's portion count.
    #[serde(default)]
    pub portions_cooked: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RateMealRequest {
    pub rating: i64,
}

#[derive(Debug, Deserialize)]
pub struct MealFilter {
    #[serde(default)]
    pub active: Option<bool>,
}
