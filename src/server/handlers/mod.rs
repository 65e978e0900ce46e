pub mod fares;
pub mod rates;
