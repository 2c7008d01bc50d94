//! Pricing Engine
//!
//! Linear rate formula: base rate plus a risk premium, minus a green
//! discount. Rounded to 2 decimals, deliberately unclamped: extreme inputs
//! can price below zero or above any nominal cap.

use super::round2;
use super::rules::RateCard;

/// Recommended interest rate in percent with the default rate card
pub fn interest_rate(probability: f64, green_score: f64) -> f64 {
    interest_rate_with_card(probability, green_score, &RateCard::default())
}

/// Recommended interest rate with a custom rate card
pub fn interest_rate_with_card(probability: f64, green_score: f64, card: &RateCard) -> f64 {
    let risk_premium = probability * card.risk_premium_factor;
    let green_discount = green_score * card.green_discount_factor;

    round2(card.base_rate + risk_premium - green_discount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_corners() {
        assert_eq!(interest_rate(0.0, 0.0), 10.00);
        assert_eq!(interest_rate(1.0, 0.0), 15.00);
        assert_eq!(interest_rate(0.0, 100.0), 8.00);
        assert_eq!(interest_rate(1.0, 100.0), 13.00);
    }

    #[test]
    fn test_rate_rounds_to_two_decimals() {
        // 10 + 0.2*5 - 80*0.02 = 9.40
        assert_eq!(interest_rate(0.2, 80.0), 9.40);
        // 10 + 0.25*5 - 50*0.02 = 10.25
        assert_eq!(interest_rate(0.25, 50.0), 10.25);
    }

    #[test]
    fn test_rate_is_unclamped() {
        // A huge green score prices below zero; accepted as documented
        assert_eq!(interest_rate(0.0, 1000.0), -10.00);
        // An out-of-range probability prices above the nominal band
        assert_eq!(interest_rate(3.0, 0.0), 25.00);
    }

    #[test]
    fn test_custom_rate_card() {
        let card = RateCard {
            base_rate: 5.0,
            risk_premium_factor: 10.0,
            green_discount_factor: 0.0,
        };
        assert_eq!(interest_rate_with_card(0.5, 100.0, &card), 10.00);
    }
}
