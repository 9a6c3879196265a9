use crate::settings::validate_settings;
use crate::store::data::Dataset;
use crate::store::StoreError;

/// Import replaces the whole dataset, so a bad backup must be rejected
/// outright rather than clamped into shape.
pub fn validate(data: &Dataset) -> Result<(), StoreError> {
    for item in &data.items {
        if item.name.trim().is_empty() {
            return Err(StoreError::Validation("item with empty name".into()));
        }
        if !(item.cost >= 0.0) {
            return Err(StoreError::Validation(format!(
                "item '{}' has a negative cost",
                item.name
            )));
        }
        if !(0.0..=100.0).contains(&item.percentage_left) {
            return Err(StoreError::Validation(format!(
                "item '{}' has percentage_left outside 0..=100",
                item.name
            )));
        }
    }

    for meal in &data.meals {
        if meal.name.trim().is_empty() {
            return Err(StoreError::Validation("meal with empty name".into()));
        }
        if let Some(rating) = meal.rating {
            if !(1..=5).contains(&rating) {
                return Err(StoreError::Validation(format!(
                    "meal '{}' has rating outside 1..=5",
                    meal.name
                )));
            }
        }
        if meal.portions_left > meal.portions_cooked {
            return Err(StoreError::Validation(format!(
                "meal '{}' has more portions left than cooked",
                meal.name
            )));
        }
        for ing in &meal.ingredients {
            if !(ing.percentage_used > 0.0 && ing.percentage_used <= 100.0) {
                return Err(StoreError::Validation(format!(
                    "meal '{}' has an ingredient with percentage_used outside 0..=100",
                    meal.name
                )));
            }
        }
    }

    for event in &data.shopping_events {
        for line in &event.lines {
            if !(line.final_price >= 0.0) {
                return Err(StoreError::Validation(format!(
                    "shopping line '{}' has a negative price",
                    line.name
                )));
            }
        }
    }

    validate_settings(&data.settings)
}
