//! Area calculator module.
//!
//! Prices custom-sized goods (banners, tarps, stickers) by area from the
//! per-m² table.

mod area;
mod session;

pub use area::{parse_dimension, AreaCalculator, CalculatorInput, CalculatorResult};
pub use session::CalculatorSession;
