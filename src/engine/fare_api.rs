use super::calculator::calculate_fare;
use super::Engine;

use crate::{
    api::FareAPI,
    entities::{FareBreakdown, FareRequest},
    error::Error,
};

impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn calculate_fare(&self, request: FareRequest) -> Result<FareBreakdown, Error> {
        let rates = self.snapshot();

        let breakdown = calculate_fare(&rates, &request).map_err(|err| {
            tracing::debug!(error = %err, "fare request rejected");
            err
        })?;

        tracing::debug!(total_fare = %breakdown.total_fare, "fare calculated");

        Ok(breakdown)
    }
}
