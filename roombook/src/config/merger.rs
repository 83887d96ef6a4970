//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers according to precedence.
///
/// Every field is replaced wholesale by a higher layer that sets it; the room
/// list is not merged element-wise.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, ConfigMerger};
///
/// let low = Config { room_label: Some("low".to_string()), ..Default::default() };
/// let high = Config { room_label: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.room_label, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.rooms.is_some() {
            target.rooms.clone_from(&source.rooms);
        }

        if source.room_label.is_some() {
            target.room_label.clone_from(&source.room_label);
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.csv_utc_offset_minutes.is_some() {
            target.csv_utc_offset_minutes = source.csv_utc_offset_minutes;
        }
    }
}
