use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// A persisted inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "serialize_quantity")]
    pub quantity: f64,
    pub description: String,
}

/// Whole quantities go out as JSON integers (`5`, not `5.0`)
fn serialize_quantity<S>(quantity: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if quantity.fract() == 0.0 && quantity.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*quantity as i64)
    } else {
        serializer.serialize_f64(*quantity)
    }
}

/// Request body for creating or replacing an item.
///
/// Fields are kept as raw JSON so that shape errors are reported with the
/// same messages as value errors.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ItemPayload {
    #[schema(value_type = String, example = "Widget")]
    pub name: Option<serde_json::Value>,
    #[schema(value_type = f64, example = 5)]
    pub quantity: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub description: Option<serde_json::Value>,
}

/// Validated item fields, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: f64,
    pub description: String,
}

/// Response for a successful create
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItemResponse {
    pub message: String,
    pub id: i64,
}
