use axum::extract::{Extension, Json};

use crate::entities::{FareBreakdown, FareRequest};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<FareRequest>,
) -> Result<Json<FareBreakdown>, Error> {
    let breakdown = api.calculate_fare(params)?;

    Ok(breakdown.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use rust_decimal_macros::dec;
    use tokio_test::block_on;

    use crate::engine::Engine;
    use crate::entities::{Rate, RateTable};
    use crate::error::Field;

    fn api() -> DynAPI {
        let table = RateTable::new("ZAR").with_rate(
            "standard",
            Rate::new(dec!(10.00), dec!(7.50), dec!(1.00), dec!(35.00)),
        );

        Arc::new(Engine::new(table).unwrap())
    }

    #[test]
    fn create_returns_breakdown() {
        let params: FareRequest = serde_json::from_str(
            r#"{ "distance": 8, "duration": 20, "vehicleType": "standard", "surge": 1.5 }"#,
        )
        .unwrap();

        let Json(breakdown) = block_on(create(Extension(api()), Json(params))).unwrap();

        assert_eq!(breakdown.total_fare, dec!(135.00));
        assert_eq!(breakdown.surge_amount, dec!(45.00));
        assert_eq!(breakdown.currency, "ZAR");
    }

    #[test]
    fn create_maps_invalid_input_to_bad_request() {
        let params: FareRequest = serde_json::from_str(
            r#"{ "distance": 0, "duration": 20, "vehicleType": "standard" }"#,
        )
        .unwrap();

        let err = block_on(create(Extension(api()), Json(params))).unwrap_err();

        assert_eq!(err.field, Some(Field::Distance));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
