pub mod calculator;
mod fare_api;
mod rate_api;

use std::sync::{Arc, PoisonError, RwLock};

use crate::{api::API, entities::RateTable, error::Error};

/// Serves fare quotes from the currently published rate table.
///
/// The table lives behind a lock only long enough to clone or swap the
/// `Arc`; calculations run against their own snapshot.
#[derive(Debug)]
pub struct Engine {
    rates: RwLock<Arc<RateTable>>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(rates: RateTable) -> Result<Self, Error> {
        rates.validate()?;

        tracing::info!(
            currency = %rates.currency,
            vehicle_types = rates.rates.len(),
            "publishing initial rate table"
        );

        Ok(Self {
            rates: RwLock::new(Arc::new(rates)),
        })
    }

    fn snapshot(&self) -> Arc<RateTable> {
        let guard = self.rates.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Builds a replacement from the current table with `f`, validates it and
    /// publishes it. Runs under the write lock so concurrent edits serialize.
    fn publish_with<F>(&self, f: F) -> Result<Arc<RateTable>, Error>
    where
        F: FnOnce(&RateTable) -> Result<RateTable, Error>,
    {
        let mut guard = self.rates.write().unwrap_or_else(PoisonError::into_inner);

        let next = f(&guard).and_then(|table| {
            table.validate()?;
            Ok(table)
        });

        let next = match next {
            Ok(table) => Arc::new(table),
            Err(err) => {
                tracing::warn!(error = %err, "rejected rate table update");
                return Err(err);
            }
        };

        *guard = Arc::clone(&next);

        tracing::info!(
            currency = %next.currency,
            vehicle_types = next.rates.len(),
            "published rate table"
        );

        Ok(next)
    }
}

impl API for Engine {}
