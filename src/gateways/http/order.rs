use crate::domain::{Order, OrderCreator};
use crate::gateways::http::error::ApiError;
use crate::gateways::http::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub quantity: i64,
}

impl CreateOrderRequest {
    /// Reads the quantity leniently: an unparsable body, a missing field or a
    /// value that is not an integer all count as quantity 0.
    pub fn from_body(body: &[u8]) -> Self {
        let quantity = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("quantity").and_then(serde_json::Value::as_i64))
            .unwrap_or(0);

        Self { quantity }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub data: Order,
}

pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    let request = CreateOrderRequest::from_body(&body);

    match state.orders.create(request.quantity).await {
        Ok(order) => Ok(Json(CreateOrderResponse { data: order })),
        Err(err) => {
            tracing::error!(payload = ?request, error = %err, "create order failed");
            Err(err.into())
        }
    }
}
