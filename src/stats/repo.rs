use std::collections::BTreeMap;

use time::Date;

use crate::store::data::Dataset;

use super::dto::{MealTypeCost, MonthlySpend, StatsSummary};

pub fn summary(data: &Dataset, today: Date) -> StatsSummary {
    let fridge_value = data
        .items
        .iter()
        .map(|i| i.cost * i.percentage_left / 100.0)
        .sum();

    let meal_count = data.meals.len();
    let average_meal_cost = if meal_count > 0 {
        Some(data.meals.iter().map(|m| m.total_cost).sum::<f64>() / meal_count as f64)
    } else {
        None
    };

    let ratings: Vec<u8> = data.meals.iter().filter_map(|m| m.rating).collect();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64)
    };

    // (sum, count) per meal type; BTreeMap for a stable output order
    let mut per_type: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for meal in &data.meals {
        if let Some(ty) = meal.meal_type.as_deref() {
            let entry = per_type.entry(ty).or_insert((0.0, 0));
            entry.0 += meal.total_cost;
            entry.1 += 1;
        }
    }
    let per_meal_type = per_type
        .into_iter()
        .map(|(ty, (sum, count))| MealTypeCost {
            meal_type: ty.to_string(),
            average_cost: sum / count as f64,
            baseline: data.settings.cost_baselines.get(ty).copied(),
        })
        .collect();

    let mut per_month: BTreeMap<String, f64> = BTreeMap::new();
    for event in &data.shopping_events {
        let key = format!("{:04}-{:02}", event.date.year(), u8::from(event.date.month()));
        *per_month.entry(key).or_insert(0.0) += event.total_cost;
    }
    let monthly_spend = per_month
        .into_iter()
        .map(|(month, total)| MonthlySpend { month, total })
        .collect();

    let expiring_soon =
        crate::items::expiring(data, today, data.settings.expiration_warning_days).len();

    StatsSummary {
        item_count: data.items.len(),
        fridge_value,
        meal_count,
        average_meal_cost,
        average_rating,
        per_meal_type,
        monthly_spend,
        expiring_soon,
    }
}
