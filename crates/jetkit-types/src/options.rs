//! Option maps forwarded to generators and tooling.

use serde_json::{Map, Value};

/// Ordered option map, as handed over by the CLI layer.
pub type Options = Map<String, Value>;

/// Build an option map from a JSON value; non-objects yield an empty map.
pub fn from_value(value: Value) -> Options {
    match value {
        Value::Object(map) => map,
        _ => Options::new(),
    }
}

/// Remove `key` from the map and report whether it was present.
///
/// Presence is what counts: `{"hybrid": false}` still takes the flag.
pub fn take_flag(options: &mut Options, key: &str) -> bool {
    options.shift_remove(key).is_some()
}

/// Render options as command line flags.
///
/// `true` becomes `--key`, `false` becomes `--no-key`, arrays repeat the flag
/// and everything else is passed as `--key=value`. `null` is dropped.
pub fn to_cli_flags(options: &Options) -> Vec<String> {
    let mut flags = Vec::new();
    for (key, value) in options {
        match value {
            Value::Null => {}
            Value::Bool(true) => flags.push(format!("--{}", key)),
            Value::Bool(false) => flags.push(format!("--no-{}", key)),
            Value::Array(items) => {
                for item in items {
                    flags.push(format!("--{}={}", key, scalar(item)));
                }
            }
            other => flags.push(format!("--{}={}", key, scalar(other))),
        }
    }
    flags
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_take_flag_strips_key() {
        let mut opts = from_value(json!({"hybrid": true, "foo": 1}));
        assert!(take_flag(&mut opts, "hybrid"));
        assert_eq!(Value::Object(opts), json!({"foo": 1}));
    }

    #[test]
    fn test_take_flag_counts_presence() {
        let mut opts = from_value(json!({"web": false, "hybrid": 0}));
        assert!(take_flag(&mut opts, "web"));
        assert!(take_flag(&mut opts, "hybrid"));
        assert!(opts.is_empty());
        assert!(!take_flag(&mut opts, "hybrid"));
    }

    #[test]
    fn test_cli_flags() {
        let opts = from_value(json!({
            "template": "navbar",
            "typescript": true,
            "installer": false,
            "platforms": ["android", "ios"],
            "skip": null,
            "port": 8000
        }));
        assert_eq!(
            to_cli_flags(&opts),
            vec![
                "--template=navbar",
                "--typescript",
                "--no-installer",
                "--platforms=android",
                "--platforms=ios",
                "--port=8000",
            ]
        );
    }

    fn any_json() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            ".*".prop_map(Value::String),
        ]
    }

    proptest! {
        #[test]
        fn present_flag_is_taken_whatever_its_value(value in any_json(), other in any::<i64>()) {
            let mut opts = Options::new();
            opts.insert("hybrid".to_string(), value);
            opts.insert("foo".to_string(), json!(other));

            prop_assert!(take_flag(&mut opts, "hybrid"));
            prop_assert_eq!(opts.len(), 1);
            prop_assert!(opts.contains_key("foo"));
        }
    }
}
