//! Deep merge for layered YAML settings.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (not merged)
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Deep merge two YAML values; `overlay` takes precedence.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge multiple layers in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_scalar_wins() {
        let merged = deep_merge(
            &yaml("legacy_os_threshold: '10.9'"),
            &yaml("legacy_os_threshold: '10.10'"),
        );
        assert_eq!(merged, yaml("legacy_os_threshold: '10.10'"));
    }

    #[test]
    fn sequences_are_replaced() {
        let merged = deep_merge(&yaml("skip: [a, b]"), &yaml("skip: [c]"));
        assert_eq!(merged, yaml("skip: [c]"));
    }

    #[test]
    fn null_deletes_key() {
        let merged = deep_merge(&yaml("skip: [a]\nother: 1"), &yaml("skip: ~"));
        assert_eq!(merged, yaml("other: 1"));
    }

    #[test]
    fn merge_configs_folds_in_order() {
        let merged = merge_configs(&[yaml("a: 1\nb: 1"), yaml("b: 2"), yaml("c: 3")]);
        assert_eq!(merged, yaml("a: 1\nb: 2\nc: 3"));
    }

    #[test]
    fn empty_layers_produce_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Default::default()));
    }
}
