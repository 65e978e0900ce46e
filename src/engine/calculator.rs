//! Fare calculation.
//!
//! Pricing order is fixed: itemise, surge the whole subtotal, apply the
//! minimum-fare floor, then round. Money is only rounded in [`round_money`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    entities::{FareBreakdown, FareRequest, RateTable},
    error::{Error, Field},
};

const MONEY_SCALE: u32 = 2;

/// Rounds half-up to two decimal places and pins the scale at two.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Prices `request` against `table`.
///
/// Fails with an invalid-input error when distance or duration is not
/// positive, surge is below 1.0, or the vehicle type has no rate row.
pub fn calculate_fare(table: &RateTable, request: &FareRequest) -> Result<FareBreakdown, Error> {
    request.validate()?;

    let rate = table.find(&request.vehicle_type)?;
    let surge = request.surge();

    let base_fare = rate.base_fare;
    let distance_fare = request
        .distance
        .checked_mul(rate.per_km_rate)
        .ok_or_else(|| too_large(Field::Distance))?;
    let time_fare = request
        .duration
        .checked_mul(rate.per_minute_rate)
        .ok_or_else(|| too_large(Field::Duration))?;
    let subtotal = base_fare
        .checked_add(distance_fare)
        .ok_or_else(|| too_large(Field::Distance))?
        .checked_add(time_fare)
        .ok_or_else(|| too_large(Field::Duration))?;

    let surged = subtotal
        .checked_mul(surge)
        .ok_or_else(|| too_large(Field::Surge))?;

    // surge_amount stays nominal when the floor binds
    let total_fare = round_money(surged.max(rate.minimum_fare));
    let surge_amount = round_money(surged - subtotal);

    Ok(FareBreakdown {
        base_fare: round_money(base_fare),
        distance_fare: round_money(distance_fare),
        time_fare: round_money(time_fare),
        surge_amount,
        total_fare,
        currency: table.currency.clone(),
    })
}

fn too_large(field: Field) -> Error {
    Error::invalid_input_error(field, format!("{} is too large to price", field))
}
