//! Eventos de posición de vehículos
//!
//! Difusión best-effort de posiciones a los subscriptores WebSocket del
//! stream de cada vehículo. Nada se persiste y no hay garantía de
//! entrega: si un subscriptor va lento, pierde eventos.

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::dto::vehicle_dto::VehiclePositionEvent;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{model_not_found, AppError};

const STREAM_CHANNEL_CAPACITY: usize = 32;

/// Registro de streams de ubicación por vehículo.
///
/// Un canal broadcast por vehículo, detrás de un RwLock: conexión,
/// desconexión y difusión concurrentes quedan serializadas por el lock
/// en vez de iterar una lista global sin sincronizar.
#[derive(Clone, Default)]
pub struct VehicleStreamRegistry {
    channels: Arc<RwLock<HashMap<Uuid, broadcast::Sender<String>>>>,
}

impl VehicleStreamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe al stream de un vehículo, creando el canal si no existe
    pub async fn subscribe(&self, vehicle_uuid: Uuid) -> broadcast::Receiver<String> {
        let mut channels = self.channels.write().await;

        channels
            .entry(vehicle_uuid)
            .or_insert_with(|| broadcast::channel(STREAM_CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Difunde un payload a los subscriptores del vehículo; devuelve a
    /// cuántos llegó. Los canales sin receivers se limpian aquí.
    pub async fn publish(&self, vehicle_uuid: Uuid, payload: String) -> usize {
        let mut channels = self.channels.write().await;

        match channels.get(&vehicle_uuid) {
            Some(sender) => match sender.send(payload) {
                Ok(receivers) => receivers,
                Err(_) => {
                    // Nadie escuchando: se retira el canal muerto
                    channels.remove(&vehicle_uuid);
                    0
                }
            },
            None => 0,
        }
    }
}

pub struct VehicleEventsService {
    vehicle_repository: VehicleRepository,
    registry: VehicleStreamRegistry,
}

impl VehicleEventsService {
    pub fn new(pool: PgPool, registry: VehicleStreamRegistry) -> Self {
        Self {
            vehicle_repository: VehicleRepository::new(pool),
            registry,
        }
    }

    /// Resuelve el vehículo y difunde su posición a los subscriptores
    pub async fn process_vehicle_position(
        &self,
        vehicle_uuid: Uuid,
        latitude: String,
        longitude: String,
    ) -> Result<usize, AppError> {
        let vehicle = self
            .vehicle_repository
            .find_by_uuid(vehicle_uuid)
            .await?
            .ok_or_else(|| model_not_found("Vehicle", &vehicle_uuid.to_string()))?;

        let event = VehiclePositionEvent {
            vehicle_uuid: vehicle.uuid,
            latitude,
            longitude,
        };

        let payload = serde_json::to_string(&event)
            .map_err(|e| AppError::Internal(format!("Error serializing position event: {}", e)))?;

        let delivered = self.registry.publish(vehicle.uuid, payload).await;

        tracing::debug!(
            "Vehicle {} position delivered to {} subscribers",
            vehicle.uuid,
            delivered
        );

        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_subscribers() {
        let registry = VehicleStreamRegistry::new();
        let vehicle_uuid = Uuid::new_v4();

        let mut receiver_a = registry.subscribe(vehicle_uuid).await;
        let mut receiver_b = registry.subscribe(vehicle_uuid).await;

        let delivered = registry
            .publish(vehicle_uuid, "{\"latitude\":\"-22.9\"}".to_string())
            .await;

        assert_eq!(delivered, 2);
        assert_eq!(receiver_a.recv().await.unwrap(), "{\"latitude\":\"-22.9\"}");
        assert_eq!(receiver_b.recv().await.unwrap(), "{\"latitude\":\"-22.9\"}");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_noop() {
        let registry = VehicleStreamRegistry::new();

        let delivered = registry.publish(Uuid::new_v4(), "{}".to_string()).await;
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn test_streams_are_isolated_per_vehicle() {
        let registry = VehicleStreamRegistry::new();
        let vehicle_a = Uuid::new_v4();
        let vehicle_b = Uuid::new_v4();

        let mut receiver_a = registry.subscribe(vehicle_a).await;
        let _receiver_b = registry.subscribe(vehicle_b).await;

        let delivered = registry.publish(vehicle_a, "ping".to_string()).await;

        assert_eq!(delivered, 1);
        assert_eq!(receiver_a.recv().await.unwrap(), "ping");
    }

    #[tokio::test]
    async fn test_dead_channel_is_cleaned_up() {
        let registry = VehicleStreamRegistry::new();
        let vehicle_uuid = Uuid::new_v4();

        let receiver = registry.subscribe(vehicle_uuid).await;
        drop(receiver);

        assert_eq!(registry.publish(vehicle_uuid, "x".to_string()).await, 0);
        assert!(!registry.channels.read().await.contains_key(&vehicle_uuid));
    }
}
