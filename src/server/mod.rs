mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};

use crate::api::API;
use crate::error::Error;
use crate::server::handlers::{fares, rates};

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/fares", post(fares::create))
        .route("/rates", get(rates::find).put(rates::replace))
        .route(
            "/rates/:vehicle_type",
            put(rates::update).delete(rates::remove),
        )
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::try_bind(&addr)
        .map_err(Error::server_error)?
        .serve(app.into_make_service())
        .await
        .map_err(Error::server_error)
}
