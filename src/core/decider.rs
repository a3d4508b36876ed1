use crate::domain::model::{DiscountAction, DiscountCodes, DiscountResult};
use crate::domain::ports::RandomSource;
use serde_json::Value;
use std::sync::Arc;

/// `floor(u * max)` for one draw `u` from `source`, kept inside `0..max`
/// even if the source misbehaves.
pub fn random_int(source: &dyn RandomSource, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let unit = source.next_unit();
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    ((unit * f64::from(max)).floor() as u32).min(max - 1)
}

/// Stand-in for real eligibility rules: picks one of four outcomes uniformly.
pub struct DiscountDecider {
    random: Arc<dyn RandomSource>,
    codes: DiscountCodes,
}

impl DiscountDecider {
    pub const BUCKETS: u32 = 4;

    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self::with_codes(random, DiscountCodes::default())
    }

    pub fn with_codes(random: Arc<dyn RandomSource>, codes: DiscountCodes) -> Self {
        Self { random, codes }
    }

    /// The cart is not inspected yet.
    pub fn decide(&self, _cart: &Value) -> DiscountResult {
        let draw = random_int(self.random.as_ref(), Self::BUCKETS);
        tracing::debug!(draw, "discount draw");
        self.outcome_for(draw)
    }

    pub fn outcome_for(&self, draw: u32) -> DiscountResult {
        match draw {
            1 => DiscountResult::Actions(vec![DiscountAction::add_discount_code(
                &self.codes.primary,
            )]),
            2 => DiscountResult::Actions(vec![DiscountAction::add_discount_code(
                &self.codes.secondary,
            )]),
            3 => DiscountResult::Actions(vec![
                DiscountAction::add_discount_code(&self.codes.primary),
                DiscountAction::add_discount_code(&self.codes.secondary),
            ]),
            _ => DiscountResult::None,
        }
    }
}
