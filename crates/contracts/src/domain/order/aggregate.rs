//! Wire-shape types for a single custom-apparel order.
//!
//! The remote service returns loose, duck-typed JSON: almost every field may
//! be missing and nesting is optional at every level. Each level is modelled
//! as an explicit optional type so callers never have to guess what is
//! present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single order as fetched by the detail page.
///
/// `stretch_data` is the order-level measurement record; its presence is what
/// gates the edit flow. The records attached to individual products are
/// display-only snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRecord {
    pub order_id: String,
    pub order_date: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub order_status: Option<String>,
    pub address: Option<String>,
    pub apartment: Option<String>,
    pub post_code: Option<String>,
    pub additional_information: Option<String>,
    /// `Some(true)` = cash on delivery, `Some(false)` = proof-of-payment
    /// image, `None` = payment mode unknown; nothing is rendered then.
    pub cash_on_delivery: Option<bool>,
    pub cash_on_delivery_image: Option<String>,
    pub products: Vec<Product>,
    pub stretch_data: Option<StretchData>,
}

/// One ordered product line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub product_id: String,
    pub title: String,
    // The service spells this one with a capital I.
    #[serde(rename = "Imageurl")]
    pub image_url: Option<String>,
    pub price: f64,
    /// Stitching surcharge per unit; absent means no surcharge.
    pub stitched_price: Option<f64>,
    pub quantity: u32,
    pub is_stitching: Option<bool>,
    /// The design only ever reads index 0 of this list.
    pub stretch_data: Vec<StretchData>,
}

/// Body-measurement record ("stretch data") used by the tailoring workflow.
///
/// `order_id` travels with the record so the update endpoint can be keyed by
/// it when an edited copy is submitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StretchData {
    pub order_id: Option<String>,
    pub kameez: Option<KameezMeasurements>,
    pub shalwar: Option<ShalwarMeasurements>,
    pub fit_preferences: Option<FitPreferences>,
    /// cm
    pub height: Option<f64>,
    /// kg
    pub weight: Option<f64>,
    pub stitch_image: Option<String>,
}

/// Top-garment measurements, all in inches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KameezMeasurements {
    pub armhole_circumference: Option<f64>,
    pub bicep_circumference: Option<f64>,
    pub bust_circumference: Option<f64>,
    pub front_neck_depth: Option<f64>,
    pub hip_circumference: Option<f64>,
    pub kameez_length: Option<f64>,
    pub neck_circumference: Option<f64>,
    pub shoulder_to_waist_length: Option<f64>,
    pub shoulder_width: Option<f64>,
    pub sleeve_length: Option<f64>,
    pub sleeve_opening_circumference: Option<f64>,
    pub waist_circumference: Option<f64>,
}

/// Bottom-garment measurements, all in inches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShalwarMeasurements {
    pub ankle_opening: Option<f64>,
    pub crotch_depth: Option<f64>,
    pub hip_circumference: Option<f64>,
    pub inseam_length: Option<f64>,
    pub outseam_length: Option<f64>,
    pub rise: Option<f64>,
    pub thigh_circumference: Option<f64>,
    pub waist_circumference: Option<f64>,
}

/// Categorical styling choices, distinct from the numeric measurements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FitPreferences {
    pub kameez_fit: Option<String>,
    pub neckline_style: Option<String>,
    pub pant_style: Option<String>,
    pub sleeve_style: Option<String>,
}

impl OrderRecord {
    /// The record shown by the measurement sections: first record of the
    /// first product, if any.
    pub fn primary_stretch_data(&self) -> Option<&StretchData> {
        self.products.first().and_then(|p| p.stretch_data.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_duck_typed_order() {
        let json = r#"{
            "orderId": "ORD-1023",
            "orderDate": "2024-03-15T14:02:26Z",
            "firstName": "Ayesha",
            "cashOnDelivery": false,
            "cashOnDeliveryImage": "https://cdn.example/proof.jpg",
            "products": [
                {
                    "productId": "P-7",
                    "title": "Embroidered Kameez",
                    "Imageurl": "https://cdn.example/p7.jpg",
                    "price": 1500.0,
                    "quantity": 2,
                    "stretchData": [
                        { "kameez": { "bustCircumference": 36 } }
                    ]
                }
            ]
        }"#;

        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, "ORD-1023");
        assert_eq!(order.first_name.as_deref(), Some("Ayesha"));
        assert_eq!(order.last_name, None);
        assert_eq!(order.cash_on_delivery, Some(false));
        assert!(order.stretch_data.is_none());

        let product = &order.products[0];
        assert_eq!(product.image_url.as_deref(), Some("https://cdn.example/p7.jpg"));
        assert_eq!(product.stitched_price, None);
        assert_eq!(
            order.primary_stretch_data().unwrap().kameez.as_ref().unwrap().bust_circumference,
            Some(36.0)
        );
    }

    #[test]
    fn empty_object_is_a_valid_order() {
        let order: OrderRecord = serde_json::from_str("{}").unwrap();
        assert!(order.products.is_empty());
        assert!(order.primary_stretch_data().is_none());
    }

    #[test]
    fn stretch_data_round_trips_through_json() {
        let record = StretchData {
            order_id: Some("ORD-1023".into()),
            kameez: Some(KameezMeasurements {
                bust_circumference: Some(36.0),
                sleeve_length: Some(22.5),
                ..Default::default()
            }),
            height: Some(162.0),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: StretchData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
