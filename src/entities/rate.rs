use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Field};

/// Pricing coefficients for one vehicle type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub base_fare: Decimal,
    pub per_km_rate: Decimal,
    pub per_minute_rate: Decimal,
    pub minimum_fare: Decimal,
}

impl Rate {
    pub fn new(
        base_fare: Decimal,
        per_km_rate: Decimal,
        per_minute_rate: Decimal,
        minimum_fare: Decimal,
    ) -> Self {
        Self {
            base_fare,
            per_km_rate,
            per_minute_rate,
            minimum_fare,
        }
    }

    pub fn validate(&self, vehicle_type: &str) -> Result<(), Error> {
        let coefficients = [
            (Field::BaseFare, self.base_fare),
            (Field::PerKmRate, self.per_km_rate),
            (Field::PerMinuteRate, self.per_minute_rate),
            (Field::MinimumFare, self.minimum_fare),
        ];

        for (field, value) in coefficients {
            if value < Decimal::ZERO {
                return Err(Error::invalid_rate_table_error(
                    field,
                    format!("{} for {} must not be negative", field, vehicle_type),
                ));
            }
        }

        if self.minimum_fare < self.base_fare {
            return Err(Error::invalid_rate_table_error(
                Field::MinimumFare,
                format!(
                    "minimumFare for {} must not be below its baseFare",
                    vehicle_type
                ),
            ));
        }

        Ok(())
    }
}

/// The full pricing configuration: a currency and one [`Rate`] per vehicle type.
///
/// A table is treated as immutable once published; pricing changes are made
/// by building a new table and swapping it in whole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub currency: String,
    pub rates: BTreeMap<String, Rate>,
}

impl RateTable {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            rates: BTreeMap::new(),
        }
    }

    pub fn with_rate(mut self, vehicle_type: impl Into<String>, rate: Rate) -> Self {
        self.rates.insert(vehicle_type.into(), rate);
        self
    }

    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let raw = fs::read_to_string(path.as_ref())?;
        let table = Self::from_json(&raw)?;

        tracing::info!(
            currency = %table.currency,
            vehicle_types = table.rates.len(),
            "loaded rate table"
        );

        Ok(table)
    }

    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let table: Self = serde_json::from_str(raw)?;
        table.validate()?;

        Ok(table)
    }

    /// Looks up the rate row for `vehicle_type`. There is no fallback row.
    pub fn find(&self, vehicle_type: &str) -> Result<&Rate, Error> {
        self.rates.get(vehicle_type).ok_or_else(|| {
            Error::invalid_input_error(
                Field::VehicleType,
                format!("unknown vehicle type: {}", vehicle_type),
            )
        })
    }

    pub fn vehicle_types(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.currency.trim().is_empty() {
            return Err(Error::invalid_rate_table_error(
                Field::Currency,
                "currency must not be empty",
            ));
        }

        if self.rates.is_empty() {
            return Err(Error::invalid_rate_table_error(
                Field::Rates,
                "rate table must define at least one vehicle type",
            ));
        }

        for (vehicle_type, rate) in &self.rates {
            if vehicle_type.trim().is_empty() {
                return Err(Error::invalid_rate_table_error(
                    Field::VehicleType,
                    "vehicle type must not be empty",
                ));
            }

            rate.validate(vehicle_type)?;
        }

        Ok(())
    }
}
