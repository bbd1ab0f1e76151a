pub mod numbers;
pub mod pricing;
pub mod sequences;
pub mod text;

pub use crate::domain::model::{Amount, FizzBuzzLabel, Zone};
pub use crate::domain::ports::TextNormalizer;
pub use crate::utils::error::Result;
