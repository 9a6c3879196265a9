use time::Date;
use uuid::Uuid;

use crate::store::data::{Dataset, Meal, MealIngredient};
use crate::store::StoreError;

use super::dto::{CreateMealRequest, NewIngredient, RecookMealRequest};

pub fn list(data: &Dataset, active: Option<bool>) -> Vec<Meal> {
    let mut meals: Vec<Meal> = data
        .meals
        .iter()
        .filter(|m| active.is_none_or(|want| m.is_active == want))
        .cloned()
        .collect();
    meals.sort_by(|a, b| b.date.cmp(&a.date));
    meals
}

pub fn get(data: &Dataset, id: Uuid) -> Result<Meal, StoreError> {
    data.meals
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .ok_or(StoreError::MealNotFound(id))
}

/// Creates a meal and consumes its ingredients from the fridge. Planned
/// meals consume immediately too; cooking them later is bookkeeping only.
///
/// Validation happens before any mutation, so a rejected request leaves
/// the fridge untouched.
pub fn create(data: &mut Dataset, req: CreateMealRequest, today: Date) -> Result<Meal, StoreError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("meal name must not be empty".into()));
    }
    if req.portions_cooked == 0 {
        return Err(StoreError::Validation(
            "a meal must have at least one portion".into(),
        ));
    }
    if req.ingredients.is_empty() {
        return Err(StoreError::Validation(
            "a meal needs at least one ingredient".into(),
        ));
    }

    let mut ingredients = Vec::with_capacity(req.ingredients.len());
    for ing in &req.ingredients {
        if !(ing.percentage_used > 0.0 && ing.percentage_used <= 100.0) {
            return Err(StoreError::Validation(
                "percentage_used must be between 0 (exclusive) and 100".into(),
            ));
        }
        let item = data
            .items
            .iter()
            .find(|i| i.id == ing.item_id)
            .ok_or(StoreError::ItemNotFound(ing.item_id))?;
        ingredients.push(MealIngredient {
            item_id: item.id,
            item_name: item.name.clone(),
            percentage_used: ing.percentage_used,
            cost: item.cost * ing.percentage_used / 100.0,
        });
    }

    apply_consumption(data, &ingredients);

    let total_cost = ingredients.iter().map(|i| i.cost).sum();
    let meal = Meal {
        id: Uuid::new_v4(),
        name: name.to_string(),
        date: req.date.unwrap_or(today),
        meal_type: req.meal_type,
        ingredients,
        total_cost,
        portions_cooked: req.portions_cooked,
        portions_left: req.portions_cooked,
        is_active: true,
        is_planned: req.is_planned,
        rating: None,
    };
    data.meals.push(meal.clone());
    Ok(meal)
}

fn apply_consumption(data: &mut Dataset, ingredients: &[MealIngredient]) {
    for ing in ingredients {
        if let Some(item) = data.items.iter_mut().find(|i| i.id == ing.item_id) {
            item.percentage_left = (item.percentage_left - ing.percentage_used).max(0.0);
        }
    }
    // an item consumed down to zero leaves the fridge
    data.items.retain(|i| i.percentage_left > 0.0);
}

/// Cook a prior meal again. Ingredients are resolved against the current
/// fridge by item id first, then by case-insensitive name, since the
/// original items may have been eaten and bought again since.
pub fn recook(
    data: &mut Dataset,
    source_id: Uuid,
    req: RecookMealRequest,
    today: Date,
) -> Result<Meal, StoreError> {
    let source = get(data, source_id)?;

    let mut resolved = Vec::with_capacity(source.ingredients.len());
    for ing in &source.ingredients {
        let item = data
            .items
            .iter()
            .find(|i| i.id == ing.item_id)
            .or_else(|| {
                data.items
                    .iter()
                    .find(|i| i.name.to_lowercase() == ing.item_name.to_lowercase())
            })
            .ok_or_else(|| {
                StoreError::Validation(format!(
                    "ingredient '{}' is no longer in the fridge",
                    ing.item_name
                ))
            })?;
        resolved.push(NewIngredient {
            item_id: item.id,
            percentage_used: ing.percentage_used,
        });
    }

    create(
        data,
        CreateMealRequest {
            name: source.name,
            date: req.date,
            meal_type: source.meal_type,
            ingredients: resolved,
            portions_cooked: req.portions_cooked.unwrap_or(source.portions_cooked),
            is_planned: req.is_planned,
        },
        today,
    )
}

/// Deleting a meal restores the consumed percentages to items that still
/// exist; ingredients whose item is gone are skipped silently.
pub fn delete(data: &mut Dataset, id: Uuid) -> Result<(), StoreError> {
    let idx = data
        .meals
        .iter()
        .position(|m| m.id == id)
        .ok_or(StoreError::MealNotFound(id))?;
    let meal = data.meals.remove(idx);
    for ing in &meal.ingredients {
        if let Some(item) = data.items.iter_mut().find(|i| i.id == ing.item_id) {
            item.percentage_left = (item.percentage_left + ing.percentage_used).min(100.0);
        }
    }
    Ok(())
}

/// Flips a planned meal to cooked. Consumption already happened at
/// planning time, so the fridge is deliberately left alone here.
pub fn mark_cooked(data: &mut Dataset, id: Uuid) -> Result<Meal, StoreError> {
    let meal = data
        .meals
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(StoreError::MealNotFound(id))?;
    if !meal.is_planned {
        return Err(StoreError::Conflict("meal is not planned".into()));
    }
    meal.is_planned = false;
    Ok(meal.clone())
}

pub fn consume_portion(data: &mut Dataset, id: Uuid) -> Result<Meal, StoreError> {
    let meal = data
        .meals
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(StoreError::MealNotFound(id))?;
    if meal.portions_left == 0 {
        return Err(StoreError::Conflict("no portions left".into()));
    }
    meal.portions_left -= 1;
    if meal.portions_left == 0 {
        meal.is_active = false;
    }
    Ok(meal.clone())
}

/// Ratings are whole stars, 1 through 5. Anything else is rejected and the
/// previous rating stays.
pub fn set_rating(data: &mut Dataset, id: Uuid, rating: i64) -> Result<Meal, StoreError> {
    if !(1..=5).contains(&rating) {
        return Err(StoreError::Validation(
            "rating must be an integer between 1 and 5".into(),
        ));
    }
    let meal = data
        .meals
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(StoreError::MealNotFound(id))?;
    meal.rating = Some(rating as u8);
    Ok(meal.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::data::FridgeItem;
    use time::macros::date;
    use time::OffsetDateTime;

    const TODAY: Date = date!(2026 - 08 - 28);

    fn item(name: &str, cost: f64, pct: f64) -> FridgeItem {
        FridgeItem {
            id: Uuid::new_v4(),
            name: name.into(),
            cost,
            percentage_left: pct,
            expiration_date: None,
            added_at: OffsetDateTime::now_utc(),
        }
    }

    fn meal_req(ingredients: Vec<NewIngredient>, planned: bool) -> CreateMealRequest {
        CreateMealRequest {
            name: "Pasta".into(),
            date: None,
            meal_type: Some("dinner".into()),
            ingredients,
            portions_cooked: 2,
            is_planned: planned,
        }
    }

    fn pct_of(data: &Dataset, id: Uuid) -> Option<f64> {
        data.items
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.percentage_left)
    }

    #[test]
    fn planned_meal_consumes_at_creation_and_delete_restores() {
        let mut data = Dataset::default();
        let tomato = item("Tomato", 2.0, 90.0);
        let tomato_id = tomato.id;
        data.items.push(tomato);

        let meal = create(
            &mut data,
            meal_req(
                vec![NewIngredient {
                    item_id: tomato_id,
                    percentage_used: 30.0,
                }],
                true,
            ),
            TODAY,
        )
        .unwrap();
        assert!(meal.is_planned);
        assert_eq!(pct_of(&data, tomato_id), Some(60.0));
        assert_eq!(meal.total_cost, 0.6);

        delete(&mut data, meal.id).unwrap();
        assert_eq!(pct_of(&data, tomato_id), Some(90.0));
        assert!(data.meals.is_empty());
    }

    #[test]
    fn delete_after_item_disappeared_is_a_silent_noop() {
        let mut data = Dataset::default();
        let cheese = item("Cheese", 4.0, 50.0);
        let cheese_id = cheese.id;
        data.items.push(cheese);

        let meal = create(
            &mut data,
            meal_req(
                vec![NewIngredient {
                    item_id: cheese_id,
                    percentage_used: 20.0,
                }],
                false,
            ),
            TODAY,
        )
        .unwrap();
        data.items.retain(|i| i.id != cheese_id);

        delete(&mut data, meal.id).unwrap();
        assert!(data.meals.is_empty());
        assert!(data.items.is_empty());
    }

    #[test]
    fn consumption_clamps_at_zero_and_removes_the_item() {
        let mut data = Dataset::default();
        let butter = item("Butter", 3.0, 25.0);
        let butter_id = butter.id;
        data.items.push(butter);

        create(
            &mut data,
            meal_req(
                vec![NewIngredient {
                    item_id: butter_id,
                    percentage_used: 60.0,
                }],
                false,
            ),
            TODAY,
        )
        .unwrap();
        assert_eq!(pct_of(&data, butter_id), None);
    }

    #[test]
    fn rejected_create_leaves_fridge_untouched() {
        let mut data = Dataset::default();
        let rice = item("Rice", 1.5, 100.0);
        let rice_id = rice.id;
        data.items.push(rice);

        let err = create(
            &mut data,
            meal_req(
                vec![
                    NewIngredient {
                        item_id: rice_id,
                        percentage_used: 40.0,
                    },
                    NewIngredient {
                        item_id: Uuid::new_v4(),
                        percentage_used: 10.0,
                    },
                ],
                false,
            ),
            TODAY,
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::ItemNotFound(_)));
        assert_eq!(pct_of(&data, rice_id), Some(100.0));
        assert!(data.meals.is_empty());
    }

    #[test]
    fn mark_cooked_flips_flag_only() {
        let mut data = Dataset::default();
        let egg = item("Egg", 0.3, 100.0);
        let egg_id = egg.id;
        data.items.push(egg);

        let meal = create(
            &mut data,
            meal_req(
                vec![NewIngredient {
                    item_id: egg_id,
                    percentage_used: 10.0,
                }],
                true,
            ),
            TODAY,
        )
        .unwrap();
        let before = pct_of(&data, egg_id);

        let cooked = mark_cooked(&mut data, meal.id).unwrap();
        assert!(!cooked.is_planned);
        assert!(cooked.is_active);
        assert_eq!(pct_of(&data, egg_id), before);

        // cooking twice is a conflict
        assert!(matches!(
            mark_cooked(&mut data, meal.id),
            Err(StoreError::Conflict(_))
        ));
    }

    #[test]
    fn rating_rejects_out_of_range_and_keeps_previous() {
        let mut data = Dataset::default();
        let bread = item("Bread", 2.2, 100.0);
        let bread_id = bread.id;
        data.items.push(bread);
        let meal = create(
            &mut data,
            meal_req(
                vec![NewIngredient {
                    item_id: bread_id,
                    percentage_used: 50.0,
                }],
                false,
            ),
            TODAY,
        )
        .unwrap();

        set_rating(&mut data, meal.id, 4).unwrap();
        for bad in [0, 6, -1] {
            assert!(matches!(
                set_rating(&mut data, meal.id, bad),
                Err(StoreError::Validation(_))
            ));
        }
        assert_eq!(data.meals[0].rating, Some(4));
    }

    #[test]
    fn last_portion_deactivates_the_meal() {
        let mut data = Dataset::default();
        let soup = item("Soup base", 2.0, 100.0);
        let soup_id = soup.id;
        data.items.push(soup);
        let meal = create(
            &mut data,
            meal_req(
                vec![NewIngredient {
                    item_id: soup_id,
                    percentage_used: 30.0,
                }],
                false,
            ),
            TODAY,
        )
        .unwrap();

        let m = consume_portion(&mut data, meal.id).unwrap();
        assert_eq!(m.portions_left, 1);
        assert!(m.is_active);
        let m = consume_portion(&mut data, meal.id).unwrap();
        assert_eq!(m.portions_left, 0);
        assert!(!m.is_active);
        assert!(matches!(
            consume_portion(&mut data, meal.id),
            Err(StoreError::Conflict(_))
        ));
    }

    #[test]
    fn recook_falls_back_to_name_match() {
        let mut data = Dataset::default();
        let old_milk = item("Milk", 1.0, 100.0);
        let old_id = old_milk.id;
        data.items.push(old_milk);
        let meal = create(
            &mut data,
            meal_req(
                vec![NewIngredient {
                    item_id: old_id,
                    percentage_used: 50.0,
                }],
                false,
            ),
            TODAY,
        )
        .unwrap();

        // the original carton is gone; a new one with a different id arrived
        data.items.retain(|i| i.id != old_id);
        let new_milk = item("MILK", 1.2, 100.0);
        let new_id = new_milk.id;
        data.items.push(new_milk);

        let recooked = recook(&mut data, meal.id, RecookMealRequest::default(), TODAY).unwrap();
        assert_eq!(recooked.name, "Pasta");
        assert_eq!(recooked.ingredients[0].item_id, new_id);
        assert_eq!(pct_of(&data, new_id), Some(50.0));
        // ingredient cost follows the current item price
        assert_eq!(recooked.total_cost, 0.6);
    }

    #[test]
    fn recook_with_no_surviving_counterpart_is_rejected() {
        let mut data = Dataset::default();
        let ham = item("Ham", 3.0, 100.0);
        let ham_id = ham.id;
        data.items.push(ham);
        let meal = create(
            &mut data,
            meal_req(
                vec![NewIngredient {
                    item_id: ham_id,
                    percentage_used: 40.0,
                }],
                false,
            ),
            TODAY,
        )
        .unwrap();
        data.items.clear();

        assert!(matches!(
            recook(&mut data, meal.id, RecookMealRequest::default(), TODAY),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(data.meals.len(), 1);
    }
}
