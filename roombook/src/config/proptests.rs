//! Property-based tests for configuration layering.

use super::{Config, ConfigMerger, ConfigValidator};
use crate::output::OutputFormat;
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Grouped),
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::collection::vec("[A-Z][0-9]?", 1..4)),
        prop::option::of("[a-z]{1,8}"),
        prop::option::of(1u64..600),
        prop::option::of(format_strategy()),
        prop::option::of(-1439i32..1440),
    )
        .prop_map(
            |(rooms, room_label, maximum_lock_wait_seconds, output_format, csv_utc_offset_minutes)| {
                Config {
                    rooms,
                    room_label,
                    maximum_lock_wait_seconds,
                    output_format,
                    csv_utc_offset_minutes,
                }
            },
        )
}

proptest! {
    // Merging a layer onto itself changes nothing
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Every field set in the higher layer survives the merge
    #[test]
    fn higher_layer_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(&merged.rooms, if high.rooms.is_some() { &high.rooms } else { &low.rooms });
        prop_assert_eq!(merged.room_label.clone(), high.room_label.clone().or(low.room_label.clone()));
        prop_assert_eq!(merged.maximum_lock_wait_seconds, high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.csv_utc_offset_minutes, high.csv_utc_offset_minutes.or(low.csv_utc_offset_minutes));
    }

    // Offsets accepted by the validator always yield an export zone
    #[test]
    fn validated_offsets_are_usable(minutes in -1439i32..1440) {
        let config = Config { csv_utc_offset_minutes: Some(minutes), ..Default::default() };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        prop_assert!(config.export_time_zone().is_ok());
    }
}
