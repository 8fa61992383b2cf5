//! Price Estimator
//!
//! A fixed-weight linear approximation of the Boston-housing model. The
//! price component is fully deterministic; the confidence score is sampled
//! from an injected uniform source so callers (and tests) own the noise.

use super::{FeatureKey, Features};

/// Dataset mean of the target variable, in thousands of dollars.
const BASE_PRICE: f64 = 24.0;

/// No estimate goes below this, whatever the inputs.
pub const PRICE_FLOOR: f64 = 50_000.0;

/// Confidence scores land in `[CONFIDENCE_MIN, CONFIDENCE_MIN + CONFIDENCE_SPAN)`.
pub const CONFIDENCE_MIN: f64 = 0.70;
const CONFIDENCE_SPAN: f64 = 0.30;

fn weight(key: FeatureKey) -> f64 {
    match key {
        FeatureKey::Crim => -0.1,
        FeatureKey::Zn => 0.05,
        FeatureKey::Indus => -0.02,
        FeatureKey::Chas => 2.7,
        FeatureKey::Nox => -17.8,
        FeatureKey::Rm => 3.8,
        FeatureKey::Age => -0.01,
        FeatureKey::Dis => 1.3,
        FeatureKey::Rad => 0.3,
        FeatureKey::Tax => -0.012,
        FeatureKey::Ptratio => -0.95,
        FeatureKey::B => 0.009,
        FeatureKey::Lstat => -0.53,
    }
}

/// Estimate a sale price in dollars for a feature vector.
///
/// Accumulates the weighted terms in dataset order onto the base price,
/// scales from thousands to dollars, and clamps to [`PRICE_FLOOR`].
pub fn estimate(features: &Features) -> f64 {
    let adjusted = FeatureKey::ALL
        .iter()
        .fold(BASE_PRICE, |acc, &key| acc + features.value(key) * weight(key));
    (adjusted * 1000.0).max(PRICE_FLOOR)
}

/// Map a uniform `[0, 1)` sample onto the confidence range `[0.70, 1.00)`.
pub fn confidence_from(noise: f64) -> f64 {
    CONFIDENCE_MIN + noise * CONFIDENCE_SPAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_is_deterministic() {
        let features = Features::example();
        assert_eq!(estimate(&features), estimate(&features));
    }

    #[test]
    fn floor_applies_to_the_reference_vector() {
        // The example vector works out to ~$28,072 before clamping.
        assert_eq!(estimate(&Features::example()), PRICE_FLOOR);
    }

    #[test]
    fn roomy_tracts_clear_the_floor() {
        let mut features = Features::example();
        features.rm = 15.0;
        let price = estimate(&features);
        assert!(price > PRICE_FLOOR);
        // 28,072.468 from the example vector plus (15 - 6.575) * 3.8 * 1000.
        assert!((price - 60_087.468).abs() < 1e-6);
    }

    #[test]
    fn charles_river_frontage_raises_the_estimate() {
        let mut on_river = Features::example();
        on_river.rm = 15.0;
        let off_river_price = estimate(&on_river);
        on_river.chas = 1.0;
        assert!((estimate(&on_river) - off_river_price - 2700.0).abs() < 1e-6);
    }

    #[test]
    fn confidence_spans_seventy_to_one_hundred_percent() {
        assert_eq!(confidence_from(0.0), 0.70);
        assert!(confidence_from(0.999_999) < 1.0);
        for i in 0..10 {
            let c = confidence_from(i as f64 / 10.0);
            assert!((0.70..1.0).contains(&c));
        }
    }
}
