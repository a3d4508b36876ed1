use crate::domain::model::DiscountCodes;

/// Uniform source of floats in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

pub trait ConfigProvider: Send + Sync {
    fn discount_codes(&self) -> DiscountCodes;
    fn random_seed(&self) -> Option<u64>;
}
