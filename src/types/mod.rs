mod market;
mod query;

pub use market::{MARKETS, Market, Symbol};
pub use query::*;

/// Amount of a token in micro-units, as returned by the pair contracts.
pub type MicroAmount = u128;

/// Token decimals reported by a cw20 contract.
pub type Decimals = u8;
