use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

use crate::store::data::{Dataset, FridgeItem};
use crate::store::StoreError;

use super::dto::{CreateItemRequest, UpdateItemRequest};

pub fn list(data: &Dataset) -> Vec<FridgeItem> {
    let mut items = data.items.clone();
    items.sort_by(|a, b| b.added_at.cmp(&a.added_at));
    items
}

pub fn get(data: &Dataset, id: Uuid) -> Result<FridgeItem, StoreError> {
    data.items
        .iter()
        .find(|i| i.id == id)
        .cloned()
        .ok_or(StoreError::ItemNotFound(id))
}

// The negated comparisons also reject NaN.
fn validate_fields(name: &str, cost: f64, percentage_left: f64) -> Result<String, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("item name must not be empty".into()));
    }
    if !(cost >= 0.0) {
        return Err(StoreError::Validation("item cost must be >= 0".into()));
    }
    if !(0.0..=100.0).contains(&percentage_left) {
        return Err(StoreError::Validation(
            "percentage_left must be between 0 and 100".into(),
        ));
    }
    Ok(name.to_string())
}

pub fn create(data: &mut Dataset, req: CreateItemRequest) -> Result<FridgeItem, StoreError> {
    let name = validate_fields(&req.name, req.cost, req.percentage_left)?;
    let item = FridgeItem {
        id: Uuid::new_v4(),
        name,
        cost: req.cost,
        percentage_left: req.percentage_left,
        expiration_date: req.expiration_date,
        added_at: OffsetDateTime::now_utc(),
    };
    data.items.push(item.clone());
    Ok(item)
}

/// Updates an item in place. An update that sets the percentage to zero
/// removes the item from the fridge, mirroring what meal consumption does.
pub fn update(
    data: &mut Dataset,
    id: Uuid,
    req: UpdateItemRequest,
) -> Result<(FridgeItem, bool), StoreError> {
    let name = validate_fields(&req.name, req.cost, req.percentage_left)?;
    let idx = data
        .items
        .iter()
        .position(|i| i.id == id)
        .ok_or(StoreError::ItemNotFound(id))?;

    let item = &mut data.items[idx];
    item.name = name;
    item.cost = req.cost;
    item.percentage_left = req.percentage_left;
    item.expiration_date = req.expiration_date;
    let updated = item.clone();

    if updated.percentage_left <= 0.0 {
        data.items.remove(idx);
        return Ok((updated, true));
    }
    Ok((updated, false))
}

pub fn delete(data: &mut Dataset, id: Uuid) -> Result<(), StoreError> {
    let idx = data
        .items
        .iter()
        .position(|i| i.id == id)
        .ok_or(StoreError::ItemNotFound(id))?;
    data.items.remove(idx);
    Ok(())
}

/// Items whose expiration date falls inside the warning window (or is
/// already past), soonest first. Items without a date never show up.
pub fn expiring(data: &Dataset, today: Date, window_days: u32) -> Vec<FridgeItem> {
    let cutoff = today + Duration::days(i64::from(window_days));
    let mut items: Vec<FridgeItem> = data
        .items
        .iter()
        .filter(|i| i.expiration_date.is_some_and(|d| d <= cutoff))
        .cloned()
        .collect();
    items.sort_by_key(|i| i.expiration_date);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn new_req(name: &str, pct: f64) -> CreateItemRequest {
        CreateItemRequest {
            name: name.into(),
            cost: 2.5,
            percentage_left: pct,
            expiration_date: None,
        }
    }

    #[test]
    fn create_trims_name_and_rejects_bad_percentage() {
        let mut data = Dataset::default();
        let item = create(&mut data, new_req("  Butter ", 100.0)).unwrap();
        assert_eq!(item.name, "Butter");

        let err = create(&mut data, new_req("Eggs", 120.0)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        let err = create(&mut data, new_req("   ", 50.0)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(data.items.len(), 1);
    }

    #[test]
    fn create_rejects_nan_cost() {
        let mut data = Dataset::default();
        let mut req = new_req("Eggs", 100.0);
        req.cost = f64::NAN;
        assert!(matches!(
            create(&mut data, req),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn update_to_zero_percentage_removes_item() {
        let mut data = Dataset::default();
        let item = create(&mut data, new_req("Yoghurt", 40.0)).unwrap();

        let (updated, removed) = update(
            &mut data,
            item.id,
            UpdateItemRequest {
                name: "Yoghurt".into(),
                cost: 2.5,
                percentage_left: 0.0,
                expiration_date: None,
            },
        )
        .unwrap();
        assert!(removed);
        assert_eq!(updated.percentage_left, 0.0);
        assert!(data.items.is_empty());
    }

    #[test]
    fn expiring_filters_by_window_and_sorts_soonest_first() {
        let mut data = Dataset::default();
        let mut soon = new_req("Milk", 100.0);
        soon.expiration_date = Some(date!(2026 - 08 - 30));
        let mut later = new_req("Cheese", 100.0);
        later.expiration_date = Some(date!(2026 - 09 - 20));
        let mut past = new_req("Ham", 100.0);
        past.expiration_date = Some(date!(2026 - 08 - 20));
        create(&mut data, soon).unwrap();
        create(&mut data, later).unwrap();
        create(&mut data, past).unwrap();
        create(&mut data, new_req("Rice", 100.0)).unwrap();

        let hits = expiring(&data, date!(2026 - 08 - 28), 3);
        let names: Vec<_> = hits.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Ham", "Milk"]);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let data = Dataset::default();
        assert!(matches!(
            get(&data, Uuid::new_v4()),
            Err(StoreError::ItemNotFound(_))
        ));
    }
}
