use lazy_static::lazy_static;
use regex::Regex;

use crate::store::data::{Dataset, Settings};
use crate::store::StoreError;

use super::dto::ReplaceSettingsRequest;

fn is_valid_currency(code: &str) -> bool {
    lazy_static! {
        static ref CURRENCY_RE: Regex = Regex::new(r"^[A-Z]{3}$").unwrap();
    }
    CURRENCY_RE.is_match(code)
}

pub(crate) fn validate_settings(settings: &Settings) -> Result<(), StoreError> {
    if !is_valid_currency(&settings.currency) {
        return Err(StoreError::Validation(
            "currency must be a three-letter uppercase code".into(),
        ));
    }
    if settings.expiration_warning_days > 365 {
        return Err(StoreError::Validation(
            "expiration_warning_days must be at most 365".into(),
        ));
    }
    if settings.view_mode.trim().is_empty() {
        return Err(StoreError::Validation("view_mode must not be empty".into()));
    }
    if settings.cost_baselines.values().any(|v| !(*v >= 0.0)) {
        return Err(StoreError::Validation(
            "cost baselines must be >= 0".into(),
        ));
    }
    Ok(())
}

pub fn get(data: &Dataset) -> Settings {
    data.settings.clone()
}

pub fn replace(data: &mut Dataset, req: ReplaceSettingsRequest) -> Result<Settings, StoreError> {
    let settings = Settings {
        currency: req.currency,
        expiration_warning_days: req.expiration_warning_days,
        cost_baselines: req.cost_baselines,
        view_mode: req.view_mode,
        api_key: req.api_key,
    };
    validate_settings(&settings)?;
    data.settings = settings;
    Ok(data.settings.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn req(currency: &str) -> ReplaceSettingsRequest {
        ReplaceSettingsRequest {
            currency: currency.into(),
            expiration_warning_days: 5,
            cost_baselines: BTreeMap::from([("dinner".to_string(), 6.0)]),
            view_mode: "list".into(),
            api_key: None,
        }
    }

    #[test]
    fn defaults_are_returned_before_any_save() {
        let data = Dataset::default();
        let settings = get(&data);
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.expiration_warning_days, 3);
    }

    #[test]
    fn replace_validates_currency_shape() {
        let mut data = Dataset::default();
        replace(&mut data, req("USD")).unwrap();
        assert_eq!(data.settings.currency, "USD");

        for bad in ["usd", "EURO", "E1R", ""] {
            assert!(matches!(
                replace(&mut data, req(bad)),
                Err(StoreError::Validation(_))
            ));
        }
        // failed replace keeps the previous record
        assert_eq!(data.settings.currency, "USD");
    }

    #[test]
    fn replace_rejects_oversized_warning_window() {
        let mut data = Dataset::default();
        let mut r = req("GBP");
        r.expiration_warning_days = 366;
        assert!(matches!(
            replace(&mut data, r),
            Err(StoreError::Validation(_))
        ));
    }
}
