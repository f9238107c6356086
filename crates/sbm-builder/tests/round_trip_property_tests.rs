mod common;

use common::{Address, Carrier, OrderPlaced, Shipment, decode, decode_shipment};

use sbm_builder::{BrokerMessageBuilder, BuilderConfig, MessageBuilder};
use sbm_core::TypeDiscriminator;

use proptest::prelude::*;

fn carrier_strategy() -> impl Strategy<Value = Carrier> {
    prop_oneof![
        (".{0,16}", any::<bool>()).prop_map(|(tracking_id, signed_for)| Carrier::Courier {
            tracking_id,
            signed_for,
        }),
        any::<u32>().prop_map(Carrier::Freight),
        Just(Carrier::Pickup),
    ]
}

fn shipment_strategy() -> impl Strategy<Value = Shipment> {
    (
        ".{0,12}",
        prop::collection::btree_map(".{0,12}", any::<u32>(), 0..6),
        (".{0,24}", "[0-9A-Z -]{0,10}"),
        carrier_strategy(),
        any::<u128>(),
        any::<i128>(),
        any::<bool>(),
    )
        .prop_map(
            |(sku, stock_counts, (street_name, postal_code), carrier, declared_value, ledger_delta, legacy)| {
                Shipment {
                    sku,
                    stock_counts,
                    delivery_address: Address {
                        street_name,
                        postal_code,
                    },
                    carrier,
                    declared_value,
                    ledger_delta,
                    legacy,
                }
            },
        )
}

// =========================================================================
// Property-Based Tests - Round Trip and Size Limit
// =========================================================================

proptest! {
    #[test]
    fn given_any_message_when_built_then_body_decodes_to_original_fields(
        sequence_id in any::<u64>(),
        contents in ".{0,256}",
        legacy in any::<bool>(),
        verbose in any::<bool>(),
    ) {
        let builder = BrokerMessageBuilder::new(BuilderConfig::new(verbose));
        let message = if legacy {
            OrderPlaced::legacy(sequence_id, &contents)
        } else {
            OrderPlaced::new(sequence_id, &contents)
        };

        let built = builder
            .build(&message, &TypeDiscriminator::from("OrderPlaced"))
            .unwrap();

        let (decoded_id, decoded_contents) = decode(built.body(), legacy);
        prop_assert_eq!(decoded_id, sequence_id);
        prop_assert_eq!(decoded_contents, Some(contents));
        prop_assert_eq!(built.message_type(), Some("OrderPlaced"));
    }

    #[test]
    fn given_lowered_limit_when_built_then_accepted_bodies_fit(
        limit in 32usize..512,
        contents in "[a-zé]{0,400}",
        legacy in any::<bool>(),
    ) {
        let builder = BrokerMessageBuilder::new(BuilderConfig::new(false).with_max_message_bytes(limit));
        let message = if legacy {
            OrderPlaced::legacy(7, &contents)
        } else {
            OrderPlaced::new(7, &contents)
        };

        let unlimited = BrokerMessageBuilder::default()
            .build(&message, &TypeDiscriminator::from("OrderPlaced"))
            .unwrap()
            .len();

        match builder.build(&message, &TypeDiscriminator::from("OrderPlaced")) {
            Ok(built) => {
                prop_assert!(built.len() <= limit);
                prop_assert_eq!(built.len(), unlimited);
            }
            Err(error) => {
                prop_assert!(error.is_oversize());
                prop_assert!(unlimited > limit);
            }
        }
    }

    #[test]
    fn given_nested_shipment_when_built_then_body_decodes_to_same_shipment(
        shipment in shipment_strategy(),
        verbose in any::<bool>(),
    ) {
        let builder = BrokerMessageBuilder::new(BuilderConfig::new(verbose));

        let built = builder
            .build(&shipment, &TypeDiscriminator::from("Shipment"))
            .unwrap();

        let decoded = decode_shipment(built.body(), shipment.legacy);
        prop_assert_eq!(decoded, shipment);
    }

    #[test]
    fn given_arbitrary_map_keys_when_built_then_keys_written_verbatim(
        shipment in shipment_strategy(),
    ) {
        let built = BrokerMessageBuilder::default()
            .build(&shipment, &TypeDiscriminator::from("Shipment"))
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(built.body()).unwrap();
        let counts_field = if shipment.legacy { "StockCounts" } else { "stockCounts" };
        let keys: Vec<&str> = value[counts_field]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let expected: Vec<&str> = shipment.stock_counts.keys().map(String::as_str).collect();

        prop_assert_eq!(keys, expected);
        prop_assert!(value.get("SKU").is_some());
    }
}
