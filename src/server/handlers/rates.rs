use axum::extract::{Extension, Json, Path};

use crate::entities::{Rate, RateTable};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn find(Extension(api): Extension<DynAPI>) -> Json<RateTable> {
    let rates = api.find_rates();

    RateTable::clone(&rates).into()
}

pub async fn replace(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<RateTable>,
) -> Result<Json<RateTable>, Error> {
    let rates = api.replace_rates(params)?;

    Ok(RateTable::clone(&rates).into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Path(vehicle_type): Path<String>,
    Json(params): Json<Rate>,
) -> Result<Json<RateTable>, Error> {
    let rates = api.update_rate(vehicle_type, params)?;

    Ok(RateTable::clone(&rates).into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path(vehicle_type): Path<String>,
) -> Result<Json<RateTable>, Error> {
    let rates = api.remove_rate(vehicle_type)?;

    Ok(RateTable::clone(&rates).into())
}
