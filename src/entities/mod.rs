mod fare;
mod rate;

pub use fare::{FareBreakdown, FareRequest};
pub use rate::{Rate, RateTable};
