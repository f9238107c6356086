#![allow(dead_code)]

use sbm_core::{ApplicationMessage, Encoding};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPlaced {
    pub queue: String,
    pub contents: Option<String>,
    pub sequence_id: u64,
    #[serde(skip)]
    pub legacy: bool,
}

impl OrderPlaced {
    pub fn new(sequence_id: u64, contents: &str) -> Self {
        Self {
            queue: String::from("orders"),
            contents: Some(contents.to_string()),
            sequence_id,
            legacy: false,
        }
    }

    pub fn legacy(sequence_id: u64, contents: &str) -> Self {
        Self {
            legacy: true,
            ..Self::new(sequence_id, contents)
        }
    }
}

impl ApplicationMessage for OrderPlaced {
    fn queue(&self) -> &str {
        &self.queue
    }

    fn encoding(&self) -> Encoding {
        Encoding::from_legacy_flag(self.legacy)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardView {
    pub queue: String,
    pub contents: Option<String>,
    pub sequence_id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyView {
    pub queue: String,
    pub contents: Option<String>,
    pub sequence_id: u64,
}

/// Decode a built body with the view matching its encoding.
pub fn decode(body: &[u8], legacy: bool) -> (u64, Option<String>) {
    if legacy {
        let view: LegacyView = serde_json::from_slice(body).expect("legacy body should decode");
        (view.sequence_id, view.contents)
    } else {
        let view: StandardView =
            serde_json::from_slice(body).expect("standard body should decode");
        (view.sequence_id, view.contents)
    }
}

/// Message exercising the shapes a naming convention must not disturb: map
/// keys, explicit renames, nesting, struct variants and 128-bit integers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shipment {
    #[serde(rename = "SKU")]
    pub sku: String,
    pub stock_counts: BTreeMap<String, u32>,
    pub delivery_address: Address,
    pub carrier: Carrier,
    pub declared_value: u128,
    pub ledger_delta: i128,
    #[serde(skip)]
    pub legacy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street_name: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Carrier {
    Courier { tracking_id: String, signed_for: bool },
    Freight(u32),
    Pickup,
}

impl ApplicationMessage for Shipment {
    fn queue(&self) -> &str {
        "shipments"
    }

    fn encoding(&self) -> Encoding {
        Encoding::from_legacy_flag(self.legacy)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardShipment {
    #[serde(rename = "SKU")]
    pub sku: String,
    pub stock_counts: BTreeMap<String, u32>,
    pub delivery_address: StandardAddress,
    pub carrier: StandardCarrier,
    pub declared_value: u128,
    pub ledger_delta: i128,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardAddress {
    pub street_name: String,
    pub postal_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all_fields = "camelCase")]
pub enum StandardCarrier {
    Courier { tracking_id: String, signed_for: bool },
    Freight(u32),
    Pickup,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyShipment {
    #[serde(rename = "SKU")]
    pub sku: String,
    pub stock_counts: BTreeMap<String, u32>,
    pub delivery_address: LegacyAddress,
    pub carrier: LegacyCarrier,
    pub declared_value: u128,
    pub ledger_delta: i128,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyAddress {
    pub street_name: String,
    pub postal_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all_fields = "PascalCase")]
pub enum LegacyCarrier {
    Courier { tracking_id: String, signed_for: bool },
    Freight(u32),
    Pickup,
}

impl From<StandardShipment> for Shipment {
    fn from(view: StandardShipment) -> Self {
        Self {
            sku: view.sku,
            stock_counts: view.stock_counts,
            delivery_address: Address {
                street_name: view.delivery_address.street_name,
                postal_code: view.delivery_address.postal_code,
            },
            carrier: match view.carrier {
                StandardCarrier::Courier {
                    tracking_id,
                    signed_for,
                } => Carrier::Courier {
                    tracking_id,
                    signed_for,
                },
                StandardCarrier::Freight(weight) => Carrier::Freight(weight),
                StandardCarrier::Pickup => Carrier::Pickup,
            },
            declared_value: view.declared_value,
            ledger_delta: view.ledger_delta,
            legacy: false,
        }
    }
}

impl From<LegacyShipment> for Shipment {
    fn from(view: LegacyShipment) -> Self {
        Self {
            sku: view.sku,
            stock_counts: view.stock_counts,
            delivery_address: Address {
                street_name: view.delivery_address.street_name,
                postal_code: view.delivery_address.postal_code,
            },
            carrier: match view.carrier {
                LegacyCarrier::Courier {
                    tracking_id,
                    signed_for,
                } => Carrier::Courier {
                    tracking_id,
                    signed_for,
                },
                LegacyCarrier::Freight(weight) => Carrier::Freight(weight),
                LegacyCarrier::Pickup => Carrier::Pickup,
            },
            declared_value: view.declared_value,
            ledger_delta: view.ledger_delta,
            legacy: true,
        }
    }
}

/// Decode a built shipment body with the views matching its encoding.
pub fn decode_shipment(body: &[u8], legacy: bool) -> Shipment {
    if legacy {
        serde_json::from_slice::<LegacyShipment>(body)
            .expect("legacy shipment should decode")
            .into()
    } else {
        serde_json::from_slice::<StandardShipment>(body)
            .expect("standard shipment should decode")
            .into()
    }
}
