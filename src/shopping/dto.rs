use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct NewLine {
    pub name: String,
    pub final_price: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    /// Defaults to today.
    #[serde(default)]
    pub date: Option<Date>,
    pub lines: Vec<NewLine>,
}

/// Full replacement of a recorded receipt. Record-keeping only; the
/// fridge is not re-derived from the edit.
#[derive(Debug, Deserialize)]
pub struct ReplaceEventRequest {
    pub date: Date,
    pub lines: Vec<NewLine>,
}
