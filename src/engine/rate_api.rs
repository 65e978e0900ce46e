use super::Engine;

use std::sync::Arc;

use crate::{
    api::RateAPI,
    entities::{Rate, RateTable},
    error::{Error, Field},
};

impl RateAPI for Engine {
    fn find_rates(&self) -> Arc<RateTable> {
        self.snapshot()
    }

    #[tracing::instrument(skip_all, fields(currency = %table.currency))]
    fn replace_rates(&self, table: RateTable) -> Result<Arc<RateTable>, Error> {
        self.publish_with(move |_| Ok(table))
    }

    #[tracing::instrument(skip(self, rate))]
    fn update_rate(&self, vehicle_type: String, rate: Rate) -> Result<Arc<RateTable>, Error> {
        self.publish_with(move |current| Ok(current.clone().with_rate(vehicle_type, rate)))
    }

    #[tracing::instrument(skip(self))]
    fn remove_rate(&self, vehicle_type: String) -> Result<Arc<RateTable>, Error> {
        self.publish_with(move |current| {
            let mut next = current.clone();

            if next.rates.remove(&vehicle_type).is_none() {
                return Err(Error::invalid_input_error(
                    Field::VehicleType,
                    format!("unknown vehicle type: {}", vehicle_type),
                ));
            }

            Ok(next)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FareAPI;
    use crate::entities::FareRequest;
    use rust_decimal_macros::dec;

    fn engine() -> Engine {
        let table = RateTable::new("ZAR").with_rate(
            "standard",
            Rate::new(dec!(10.00), dec!(7.50), dec!(1.00), dec!(35.00)),
        );

        Engine::new(table).unwrap()
    }

    #[test]
    fn update_adds_a_vehicle_type() {
        let engine = engine();
        let premium = Rate::new(dec!(20.00), dec!(12.00), dec!(2.00), dec!(60.00));

        let table = engine.update_rate("premium".into(), premium).unwrap();
        assert_eq!(
            table.vehicle_types().collect::<Vec<_>>(),
            vec!["premium", "standard"]
        );

        let fare = engine
            .calculate_fare(FareRequest::new(dec!(25), dec!(45), "premium"))
            .unwrap();
        assert_eq!(fare.total_fare, dec!(410.00));
    }

    #[test]
    fn invalid_update_keeps_previous_table() {
        let engine = engine();
        let before = engine.find_rates();

        let broken = Rate::new(dec!(50.00), dec!(7.50), dec!(1.00), dec!(35.00));
        let err = engine.update_rate("standard".into(), broken).unwrap_err();

        assert!(err.is_invalid_rate_table_error());
        assert_eq!(engine.find_rates(), before);
    }

    #[test]
    fn snapshots_outlive_replacement() {
        let engine = engine();
        let old = engine.find_rates();

        let replacement = RateTable::new("USD").with_rate(
            "standard",
            Rate::new(dec!(3.00), dec!(1.50), dec!(0.25), dec!(8.00)),
        );
        engine.replace_rates(replacement).unwrap();

        assert_eq!(old.currency, "ZAR");
        assert_eq!(engine.find_rates().currency, "USD");
    }

    #[test]
    fn remove_rejects_unknown_and_last_vehicle_type() {
        let engine = engine();

        let err = engine.remove_rate("premium".into()).unwrap_err();
        assert!(err.is_invalid_input_error());

        let err = engine.remove_rate("standard".into()).unwrap_err();
        assert_eq!(err.field, Some(Field::Rates));

        let fare = engine
            .calculate_fare(FareRequest::new(dec!(5), dec!(15), "standard"))
            .unwrap();
        assert_eq!(fare.total_fare, dec!(62.50));
    }

    #[test]
    fn removed_vehicle_type_is_no_longer_priced() {
        let engine = engine();
        let premium = Rate::new(dec!(20.00), dec!(12.00), dec!(2.00), dec!(60.00));
        engine.update_rate("premium".into(), premium).unwrap();

        engine.remove_rate("premium".into()).unwrap();

        let err = engine
            .calculate_fare(FareRequest::new(dec!(25), dec!(45), "premium"))
            .unwrap_err();
        assert_eq!(err.field, Some(Field::VehicleType));
    }
}
