//! API layer for the order detail page.

use crate::shared::api_utils::api_base;
use contracts::domain::order::{OrderRecord, StretchData};
use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct FetchOrderResponse {
    order: OrderRecord,
}

pub async fn fetch_order(order_id: &str) -> Result<OrderRecord, String> {
    let url = format!("{}/api/get-order-by-orderId/{}", api_base(), order_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    let parsed: FetchOrderResponse =
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse: {}", e))?;
    Ok(parsed.order)
}

/// Submits an edited measurement record, keyed by the order id embedded in
/// the record. The record travels as a JSON `stretchData` part of a
/// multipart body. The response body is not read; the caller keeps the
/// submitted record as the new local state.
pub async fn update_measurements(record: &StretchData) -> Result<(), String> {
    let order_id = record
        .order_id
        .as_deref()
        .ok_or_else(|| "Measurement record carries no order id".to_string())?;

    let form =
        web_sys::FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
    let json = serde_json::to_string(record).map_err(|e| format!("Failed to encode: {}", e))?;
    form.append_with_str("stretchData", &json)
        .map_err(|e| format!("Failed to build form data: {:?}", e))?;

    let url = format!("{}/api/billing-details/{}", api_base(), order_id);
    let response = Request::put(&url)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update: {}", e))?;

    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }
    Ok(())
}
