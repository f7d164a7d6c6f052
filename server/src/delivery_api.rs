//! Delivery API - Handlers, DTOs and Mappers
//!
//! Inbound HTTP adapter for delivery operations. Domain objects are
//! constructed here from external input (the validation site for
//! delivery numbers) and mapped back to DTOs on the way out; domain
//! types never cross the HTTP boundary directly.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use reparto_domain::{Delivery, DeliveryItem, DeliveryNumber};
use reparto_ports::DeliveryUseCase;

use crate::error::{ApiError, ApiResult};
use crate::metrics::MetricsRegistry;

// ==================== REQUEST/RESPONSE DTOs ====================

#[derive(Deserialize, Debug)]
pub struct CreateDeliveryRequest {
    pub delivery_number: String,
    pub destination: String,
    #[serde(default)]
    pub items: Vec<DeliveryItemDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeliveryItemDto {
    pub name: String,
    pub quantity: u32,
}

#[derive(Serialize, Debug, Clone)]
pub struct DeliveryResponse {
    pub delivery_number: String,
    pub destination: String,
    pub items: Vec<DeliveryItemDto>,
    pub status: String,
    pub created_at: String,
}

// ==================== MAPPERS ====================

fn to_domain(request: CreateDeliveryRequest) -> ApiResult<Delivery> {
    let number = DeliveryNumber::new(request.delivery_number)?;
    let items = request
        .items
        .into_iter()
        .map(|item| DeliveryItem::new(item.name, item.quantity))
        .collect();

    Ok(Delivery::new(number, request.destination, items))
}

fn to_response(delivery: Delivery) -> DeliveryResponse {
    DeliveryResponse {
        delivery_number: delivery.delivery_number.to_string(),
        destination: delivery.destination,
        items: delivery
            .items
            .into_iter()
            .map(|item| DeliveryItemDto {
                name: item.name,
                quantity: item.quantity,
            })
            .collect(),
        status: delivery.status.to_string(),
        created_at: delivery.created_at.to_rfc3339(),
    }
}

// ==================== APPLICATION STATE ====================

#[derive(Clone)]
pub struct AppState {
    pub delivery_use_case: Arc<dyn DeliveryUseCase>,
    pub metrics: MetricsRegistry,
}

// ==================== DELIVERY HANDLERS ====================

pub async fn create_delivery_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateDeliveryRequest>,
) -> ApiResult<Json<DeliveryResponse>> {
    let timer = state.metrics.http_request_duration_seconds.start_timer();

    let delivery = to_domain(request)?;
    let created = state.delivery_use_case.create_delivery(delivery).await?;

    state.metrics.deliveries_created_total.inc();
    timer.observe_duration();

    Ok(Json(to_response(created)))
}

pub async fn get_delivery_handler(
    State(state): State<AppState>,
    Path(delivery_number): Path<String>,
) -> ApiResult<Json<DeliveryResponse>> {
    let timer = state.metrics.http_request_duration_seconds.start_timer();

    let number = DeliveryNumber::new(delivery_number)?;
    let result = state.delivery_use_case.get_delivery(&number).await?;
    timer.observe_duration();

    match result {
        Some(delivery) => {
            state
                .metrics
                .delivery_lookups_total
                .with_label_values(&["hit"])
                .inc();
            Ok(Json(to_response(delivery)))
        }
        None => {
            state
                .metrics
                .delivery_lookups_total
                .with_label_values(&["miss"])
                .inc();
            Err(ApiError::DeliveryNotFound(number))
        }
    }
}

pub async fn delete_delivery_handler(
    State(state): State<AppState>,
    Path(delivery_number): Path<String>,
) -> ApiResult<StatusCode> {
    let timer = state.metrics.http_request_duration_seconds.start_timer();

    let number = DeliveryNumber::new(delivery_number)?;
    state.delivery_use_case.delete_delivery(&number).await?;

    state.metrics.deliveries_deleted_total.inc();
    timer.observe_duration();

    Ok(StatusCode::NO_CONTENT)
}

// ==================== ROUTES ====================

pub fn delivery_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/deliveries", post(create_delivery_handler))
        .route(
            "/api/deliveries/{delivery_number}",
            get(get_delivery_handler).delete(delete_delivery_handler),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reparto_domain::DeliveryStatus;

    #[test]
    fn test_to_domain_validates_delivery_number() {
        let request = CreateDeliveryRequest {
            delivery_number: "   ".to_string(),
            destination: "Bilbao".to_string(),
            items: vec![],
        };

        let result = to_domain(request);

        assert!(result.is_err());
    }

    #[test]
    fn test_to_domain_maps_all_fields() {
        let request = CreateDeliveryRequest {
            delivery_number: "ORD-1001".to_string(),
            destination: "Calle Mayor 1, Bilbao".to_string(),
            items: vec![DeliveryItemDto {
                name: "bolts".to_string(),
                quantity: 12,
            }],
        };

        let delivery = to_domain(request).unwrap();

        assert_eq!(delivery.delivery_number.as_str(), "ORD-1001");
        assert_eq!(delivery.destination, "Calle Mayor 1, Bilbao");
        assert_eq!(delivery.items.len(), 1);
        assert_eq!(delivery.status, DeliveryStatus::Pending);
    }

    #[test]
    fn test_to_response_round_trips_fields() {
        let delivery = Delivery::new(
            DeliveryNumber::new("ORD-2002").unwrap(),
            "Donostia".to_string(),
            vec![DeliveryItem::new("nails".to_string(), 7)],
        );

        let response = to_response(delivery);

        assert_eq!(response.delivery_number, "ORD-2002");
        assert_eq!(response.destination, "Donostia");
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.status, "Pending");
        assert!(!response.created_at.is_empty());
    }
}
