// src/models/purchase.rs
// DOCUMENTATION: Core data structures for purchases
// PURPOSE: Defines purchase models, size/state choices and derived cube properties

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{Color, ColorSummary, Material, MaterialSummary};

/// Base price every purchase starts from, before material and color costs
pub const DEFAULT_PURCHASE_PRICE: i64 = 1000;

/// Weight limit in kg above which air balloon delivery is unavailable
pub const AIR_BALLOON_WEIGHT_LIMIT: i64 = 150_000;

/// Purchase size choices
/// DOCUMENTATION: The discriminant is the cube edge length in meters,
/// so M means a 5x5x5 cube with a volume of 125 m3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum Size {
    S = 1,
    M = 5,
    L = 10,
    Xl = 15,
    Xxl = 20,
    Xxxl = 25,
}

impl Size {
    /// Cube edge length in meters
    pub fn edge(self) -> i64 {
        self as i16 as i64
    }

    /// Surface area in m2, calculated as the six faces of the cube
    pub fn square(self) -> i64 {
        let edge = self.edge();
        edge * edge * 6
    }

    /// Volume in m3
    pub fn volume(self) -> i64 {
        let edge = self.edge();
        edge * edge * edge
    }
}

impl From<Size> for i16 {
    fn from(size: Size) -> i16 {
        size as i16
    }
}

impl TryFrom<i16> for Size {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Size::S),
            5 => Ok(Size::M),
            10 => Ok(Size::L),
            15 => Ok(Size::Xl),
            20 => Ok(Size::Xxl),
            25 => Ok(Size::Xxxl),
            other => Err(format!("invalid purchase size: {}", other)),
        }
    }
}

/// Purchase lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum PurchaseState {
    Rejected = -1,
    Waited = 0,
    Accepted = 1,
    Sent = 2,
}

impl From<PurchaseState> for i16 {
    fn from(state: PurchaseState) -> i16 {
        state as i16
    }
}

impl TryFrom<i16> for PurchaseState {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(PurchaseState::Rejected),
            0 => Ok(PurchaseState::Waited),
            1 => Ok(PurchaseState::Accepted),
            2 => Ok(PurchaseState::Sent),
            other => Err(format!("invalid purchase state: {}", other)),
        }
    }
}

/// How a purchase leaves the warehouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryType {
    #[serde(rename = "air balloon")]
    AirBalloon,
    #[serde(rename = "trolley")]
    Trolley,
}

/// Derived cube properties shared by purchases and prepared purchases
/// DOCUMENTATION: The purchase is represented as a cube with some properties;
/// weight and price fall out of the size plus the chosen material and color
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseProperties {
    /// Surface area in m2
    pub square: i64,

    /// Volume in m3
    pub volume: i64,

    /// Weight in kg
    pub weight: i64,

    /// Total price: base price + material cost by volume + color cost by surface
    pub price: i64,

    pub delivery_type: DeliveryType,
}

impl PurchaseProperties {
    /// Calculate derived properties for a size/material/color combination
    pub fn calculate(size: Size, color: &Color, material: &Material) -> Self {
        let square = size.square();
        let volume = size.volume();
        let weight = material.density as i64 * volume;

        let price = DEFAULT_PURCHASE_PRICE
            + material.cost as i64 * volume
            + color.cost as i64 * square;

        // Light enough and small enough goes by air, everything else by trolley
        let delivery_type = if size < Size::Xxl && weight < AIR_BALLOON_WEIGHT_LIMIT {
            DeliveryType::AirBalloon
        } else {
            DeliveryType::Trolley
        };

        PurchaseProperties {
            square,
            volume,
            weight,
            price,
            delivery_type,
        }
    }
}

/// Users purchase record
/// DOCUMENTATION: Maps directly to the purchases table
/// The unique 32-hex code is the public lookup key, never the UUID
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Purchase {
    pub id: Uuid,

    /// Unique code handed to the customer for retrieval
    pub code: String,

    pub color_id: Uuid,
    pub material_id: Uuid,
    pub size: Size,
    pub state: PurchaseState,

    /// Delivery address inside Westland
    pub address: String,

    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

/// Request DTO for creating a new purchase
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreatePurchaseRequest {
    pub color_id: Uuid,
    pub material_id: Uuid,
    pub size: Size,

    #[validate(length(min = 1, max = 512))]
    pub address: String,
}

/// Request DTO for updating an existing purchase
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdatePurchaseRequest {
    pub color_id: Option<Uuid>,
    pub material_id: Option<Uuid>,
    pub size: Option<Size>,
    pub state: Option<PurchaseState>,

    #[validate(length(min = 1, max = 512))]
    pub address: Option<String>,
}

/// Response DTO for purchase read endpoints
/// DOCUMENTATION: Embeds color/material summaries and derived properties,
/// the way customers see their order
#[derive(Debug, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub code: String,
    pub color: ColorSummary,
    pub material: MaterialSummary,
    pub size: Size,
    pub weight: i64,
    pub price: i64,
    pub delivery_type: DeliveryType,
    pub state: PurchaseState,
    pub address: String,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl PurchaseResponse {
    /// Assemble the read DTO from a purchase and its catalog rows
    pub fn from_parts(purchase: &Purchase, color: &Color, material: &Material) -> Self {
        let props = PurchaseProperties::calculate(purchase.size, color, material);

        PurchaseResponse {
            code: purchase.code.clone(),
            color: color.to_summary(),
            material: material.to_summary(),
            size: purchase.size,
            weight: props.weight,
            price: props.price,
            delivery_type: props.delivery_type,
            state: purchase.state,
            address: purchase.address.clone(),
            date_created: purchase.date_created,
            date_updated: purchase.date_updated,
        }
    }
}

/// Prepared purchase preset
/// DOCUMENTATION: Curated settings a customer can order as-is; a purchase
/// matching a preset skips the consult step
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PreparedPurchase {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub color_id: Uuid,
    pub material_id: Uuid,
    pub size: Size,
}

/// Request DTO for creating a prepared purchase
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreatePreparedPurchaseRequest {
    #[validate(length(min = 1, max = 128))]
    pub title: String,

    #[validate(length(min = 1, max = 512))]
    pub description: String,

    pub color_id: Uuid,
    pub material_id: Uuid,
    pub size: Size,
}

/// Request DTO for updating a prepared purchase
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdatePreparedPurchaseRequest {
    #[validate(length(min = 1, max = 128))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 512))]
    pub description: Option<String>,

    pub color_id: Option<Uuid>,
    pub material_id: Option<Uuid>,
    pub size: Option<Size>,
}

/// Response DTO for prepared purchase read endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct PreparedPurchaseResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub color: ColorSummary,
    pub material: MaterialSummary,
    pub size: Size,
    pub weight: i64,
    pub price: i64,
    pub delivery_type: DeliveryType,
}

impl PreparedPurchaseResponse {
    pub fn from_parts(prepared: &PreparedPurchase, color: &Color, material: &Material) -> Self {
        let props = PurchaseProperties::calculate(prepared.size, color, material);

        PreparedPurchaseResponse {
            id: prepared.id,
            title: prepared.title.clone(),
            description: prepared.description.clone(),
            color: color.to_summary(),
            material: material.to_summary(),
            size: prepared.size,
            weight: props.weight,
            price: props.price,
            delivery_type: props.delivery_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(cost: i32) -> Color {
        Color {
            id: Uuid::new_v4(),
            name: "Yellow".to_string(),
            cost,
            description: String::new(),
        }
    }

    fn material(cost: i32, density: i32) -> Material {
        Material {
            id: Uuid::new_v4(),
            name: "Iron".to_string(),
            cost,
            density,
            description: String::new(),
        }
    }

    #[test]
    fn test_delivery_type_by_size_and_weight() {
        let yellow = color(0);
        let iron = material(0, 7800);

        // Small iron cube: 1 m3, 7 800 kg, goes by air
        let props = PurchaseProperties::calculate(Size::S, &yellow, &iron);
        assert_eq!(props.delivery_type, DeliveryType::AirBalloon);

        // XXXL fails the size check regardless of weight
        let props = PurchaseProperties::calculate(Size::Xxxl, &yellow, &iron);
        assert_eq!(props.delivery_type, DeliveryType::Trolley);

        // XL iron cube is small enough but far too heavy: 3375 m3 * 7800 kg/m3
        let props = PurchaseProperties::calculate(Size::Xl, &yellow, &iron);
        assert!(props.weight >= AIR_BALLOON_WEIGHT_LIMIT);
        assert_eq!(props.delivery_type, DeliveryType::Trolley);

        // Weightless XL cube goes by air again
        let foam = material(0, 0);
        let props = PurchaseProperties::calculate(Size::Xl, &yellow, &foam);
        assert_eq!(props.delivery_type, DeliveryType::AirBalloon);
    }

    #[test]
    fn test_price_sums_base_material_and_color_costs() {
        let yellow = color(100);
        let iron = material(50, 7800);

        // M cube: volume 125 m3, surface 150 m2
        let props = PurchaseProperties::calculate(Size::M, &yellow, &iron);

        assert_eq!(props.volume, 125);
        assert_eq!(props.square, 150);
        assert_eq!(
            props.price,
            DEFAULT_PURCHASE_PRICE + 50 * 125 + 100 * 150
        );
    }

    #[test]
    fn test_weight_is_density_times_volume() {
        let props = PurchaseProperties::calculate(Size::L, &color(0), &material(0, 7800));
        assert_eq!(props.weight, 7800 * 1000);
    }

    #[test]
    fn test_size_conversions() {
        assert_eq!(Size::try_from(1), Ok(Size::S));
        assert_eq!(Size::try_from(25), Ok(Size::Xxxl));
        assert!(Size::try_from(7).is_err());

        assert_eq!(i16::from(Size::Xxl), 20);
    }

    #[test]
    fn test_state_conversions() {
        assert_eq!(PurchaseState::try_from(-1), Ok(PurchaseState::Rejected));
        assert_eq!(PurchaseState::try_from(0), Ok(PurchaseState::Waited));
        assert!(PurchaseState::try_from(3).is_err());
    }

    #[test]
    fn test_delivery_type_wire_format() {
        let json = serde_json::to_string(&DeliveryType::AirBalloon).unwrap();
        assert_eq!(json, "\"air balloon\"");

        let json = serde_json::to_string(&DeliveryType::Trolley).unwrap();
        assert_eq!(json, "\"trolley\"");
    }

    #[test]
    fn test_size_wire_format_is_numeric() {
        let json = serde_json::to_string(&Size::M).unwrap();
        assert_eq!(json, "5");

        let size: Size = serde_json::from_str("20").unwrap();
        assert_eq!(size, Size::Xxl);

        assert!(serde_json::from_str::<Size>("7").is_err());
    }
}
