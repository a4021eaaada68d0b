//! A network shared between the event feed and query callers.

use std::sync::Arc;

use network_monitor_transit::prelude::*;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cheaply clonable handle to one [`TransportNetwork`]
///
/// Queries share a read lock; loading and passenger events take the write
/// lock, so every engine operation runs without interleaving.
#[derive(Clone, Debug, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<TransportNetwork>>,
}

impl SharedNetwork {
    pub fn new(network: TransportNetwork) -> Self {
        Self {
            inner: Arc::new(RwLock::new(network)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, TransportNetwork> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, TransportNetwork> {
        self.inner.write().await
    }

    /// Swap in a freshly loaded network, returning the old one
    pub async fn replace(&self, network: TransportNetwork) -> TransportNetwork {
        std::mem::replace(&mut *self.inner.write().await, network)
    }

    pub async fn record_passenger_event(&self, event: &PassengerEvent) -> Result<i64> {
        self.inner.write().await.record_passenger_event(event)
    }

    pub async fn passenger_count(&self, station: &StationIdentifier) -> Result<i64> {
        self.inner.read().await.passenger_count(station)
    }

    pub async fn routes_serving_station(&self, station: &StationIdentifier) -> Vec<RouteIdentifier> {
        self.inner.read().await.routes_serving_station(station)
    }

    pub async fn travel_time(
        &self,
        station_a: &StationIdentifier,
        station_b: &StationIdentifier,
    ) -> Result<u32> {
        self.inner.read().await.travel_time(station_a, station_b)
    }

    pub async fn route_travel_time(
        &self,
        line: &LineIdentifier,
        route: &RouteIdentifier,
        station_a: &StationIdentifier,
        station_b: &StationIdentifier,
    ) -> Result<u32> {
        self.inner
            .read()
            .await
            .route_travel_time(line, route, station_a, station_b)
    }
}
