use std::sync::Arc;

use crate::entities::{FareBreakdown, FareRequest, Rate, RateTable};
use crate::error::Error;

pub trait FareAPI {
    fn calculate_fare(&self, request: FareRequest) -> Result<FareBreakdown, Error>;
}

pub trait RateAPI {
    fn find_rates(&self) -> Arc<RateTable>;
    fn replace_rates(&self, table: RateTable) -> Result<Arc<RateTable>, Error>;
    fn update_rate(&self, vehicle_type: String, rate: Rate) -> Result<Arc<RateTable>, Error>;
    fn remove_rate(&self, vehicle_type: String) -> Result<Arc<RateTable>, Error>;
}

pub trait API: FareAPI + RateAPI {}
