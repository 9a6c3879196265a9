use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::store::data::{Dataset, FridgeItem, ShoppingEvent, ShoppingLine};
use crate::store::StoreError;

use super::dto::{CreateEventRequest, NewLine, ReplaceEventRequest};

pub fn list(data: &Dataset) -> Vec<ShoppingEvent> {
    let mut events = data.shopping_events.clone();
    events.sort_by(|a, b| b.date.cmp(&a.date));
    events
}

pub fn get(data: &Dataset, id: Uuid) -> Result<ShoppingEvent, StoreError> {
    data.shopping_events
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .ok_or(StoreError::EventNotFound(id))
}

fn validate_lines(lines: &[NewLine]) -> Result<Vec<ShoppingLine>, StoreError> {
    if lines.is_empty() {
        return Err(StoreError::Validation(
            "a shopping event needs at least one line".into(),
        ));
    }
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let name = line.name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation("line name must not be empty".into()));
        }
        if !(line.final_price >= 0.0) {
            return Err(StoreError::Validation("final_price must be >= 0".into()));
        }
        out.push(ShoppingLine {
            name: name.to_string(),
            final_price: line.final_price,
        });
    }
    Ok(out)
}

/// Saves a receipt and folds every line into the fridge: a line matching
/// an existing item case-insensitively tops that item up and takes over
/// its cost, anything else becomes a new full item.
pub fn create(
    data: &mut Dataset,
    req: CreateEventRequest,
    today: Date,
) -> Result<ShoppingEvent, StoreError> {
    let lines = validate_lines(&req.lines)?;

    for line in &lines {
        let wanted = line.name.to_lowercase();
        match data
            .items
            .iter_mut()
            .find(|i| i.name.to_lowercase() == wanted)
        {
            Some(item) => {
                item.percentage_left = (item.percentage_left + 100.0).min(100.0);
                item.cost = line.final_price;
            }
            None => data.items.push(FridgeItem {
                id: Uuid::new_v4(),
                name: line.name.clone(),
                cost: line.final_price,
                percentage_left: 100.0,
                expiration_date: None,
                added_at: OffsetDateTime::now_utc(),
            }),
        }
    }

    let event = ShoppingEvent {
        id: Uuid::new_v4(),
        date: req.date.unwrap_or(today),
        total_cost: lines.iter().map(|l| l.final_price).sum(),
        lines,
    };
    data.shopping_events.push(event.clone());
    Ok(event)
}

pub fn replace(
    data: &mut Dataset,
    id: Uuid,
    req: ReplaceEventRequest,
) -> Result<ShoppingEvent, StoreError> {
    let lines = validate_lines(&req.lines)?;
    let event = data
        .shopping_events
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(StoreError::EventNotFound(id))?;
    event.date = req.date;
    event.total_cost = lines.iter().map(|l| l.final_price).sum();
    event.lines = lines;
    Ok(event.clone())
}

pub fn delete(data: &mut Dataset, id: Uuid) -> Result<(), StoreError> {
    let idx = data
        .shopping_events
        .iter()
        .position(|e| e.id == id)
        .ok_or(StoreError::EventNotFound(id))?;
    data.shopping_events.remove(idx);
    Ok(())
}
