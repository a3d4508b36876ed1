pub mod decider;
pub mod handler;

pub use crate::domain::model::{DiscountAction, DiscountCodes, DiscountResult, RequestEnvelope};
pub use crate::domain::ports::{ConfigProvider, RandomSource};
pub use crate::utils::error::Result;
