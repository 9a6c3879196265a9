use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MealTypeCost {
    pub meal_type: String,
    pub average_cost: f64,
    /// The expected cost configured in settings, when one exists for this type.
    pub baseline: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MonthlySpend {
    /// Calendar month, `YYYY-MM`.
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsSummary {
    pub item_count: usize,
    /// Sum of `cost * percentage_left / 100` over the fridge.
    pub fridge_value: f64,
    pub meal_count: usize,
    pub average_meal_cost: Option<f64>,
    pub average_rating: Option<f64>,
    pub per_meal_type: Vec<MealTypeCost>,
    pub monthly_spend: Vec<MonthlySpend>,
    pub expiring_soon: usize,
}
