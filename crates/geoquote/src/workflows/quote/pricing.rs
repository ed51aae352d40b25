use serde::{Deserialize, Serialize};

/// Injected rate card for the tiered pricing rule.
///
/// Amounts are minor currency units (cents) so repeated additions stay
/// exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRates {
    pub base_per_country: u64,
    pub additional_feature_per_country: u64,
}

/// Inputs to one pricing calculation.
///
/// Feature order is significant: index 0 is the free feature, whichever
/// feature the user picked first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingInput {
    pub country_count: u32,
    pub selected_features: Vec<String>,
}

/// Price breakdown plus the inputs that produced it, kept for display and
/// audit. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingData {
    pub base_price: u64,
    pub additional_features_price: u64,
    pub total_price: u64,
    pub country_count: u32,
    pub selected_features: Vec<String>,
}

/// Price a selection of countries and features.
///
/// The first selected feature is always free; every further feature is
/// charged per country. Zero countries or zero features produce a valid
/// zero-priced breakdown.
pub fn price(rates: &PricingRates, input: &PricingInput) -> PricingData {
    let country_count = u64::from(input.country_count);
    let additional_feature_count = input.selected_features.len().saturating_sub(1) as u64;

    let base_price = country_count * rates.base_per_country;
    let additional_features_price =
        additional_feature_count * country_count * rates.additional_feature_per_country;

    PricingData {
        base_price,
        additional_features_price,
        total_price: base_price + additional_features_price,
        country_count: input.country_count,
        selected_features: input.selected_features.clone(),
    }
}
