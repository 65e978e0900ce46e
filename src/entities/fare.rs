use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Field};

/// A trip to be priced. Constructed per request and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareRequest {
    /// Kilometres.
    pub distance: Decimal,
    /// Minutes.
    pub duration: Decimal,
    pub vehicle_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surge: Option<Decimal>,
}

impl FareRequest {
    pub fn new(distance: Decimal, duration: Decimal, vehicle_type: impl Into<String>) -> Self {
        Self {
            distance,
            duration,
            vehicle_type: vehicle_type.into(),
            surge: None,
        }
    }

    pub fn with_surge(mut self, surge: Decimal) -> Self {
        self.surge = Some(surge);
        self
    }

    /// The surge multiplier, `1.0` when none was supplied.
    pub fn surge(&self) -> Decimal {
        self.surge.unwrap_or(Decimal::ONE)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.distance <= Decimal::ZERO {
            return Err(Error::invalid_input_error(
                Field::Distance,
                "distance must be greater than zero",
            ));
        }

        if self.duration <= Decimal::ZERO {
            return Err(Error::invalid_input_error(
                Field::Duration,
                "duration must be greater than zero",
            ));
        }

        if self.surge() < Decimal::ONE {
            return Err(Error::invalid_input_error(
                Field::Surge,
                "surge must be at least 1.0",
            ));
        }

        Ok(())
    }
}

/// Itemised result of pricing a trip. All amounts carry two decimal places.
///
/// `base_fare`, `distance_fare` and `time_fare` are the pre-surge components,
/// each rounded on its own. `surge_amount` is the nominal surge delta
/// (`subtotal * surge - subtotal`) even when the minimum fare is what gets
/// charged. Because of that, the components are not guaranteed to add up to
/// `total_fare` once surge or the minimum-fare floor applies, and callers must
/// not reconcile them additively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareBreakdown {
    pub base_fare: Decimal,
    pub distance_fare: Decimal,
    pub time_fare: Decimal,
    pub surge_amount: Decimal,
    pub total_fare: Decimal,
    pub currency: String,
}
