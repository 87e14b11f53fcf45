use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Serialize `value` and read it back.
pub fn round_trip<T: Serialize + DeserializeOwned>(value: &T) -> T {
    let json = serde_json::to_string(value).expect("serialize");
    serde_json::from_str(&json).expect("deserialize")
}

/// Serialize `value` to a JSON object.
pub fn to_object<T: Serialize>(value: &T) -> serde_json::Map<String, Value> {
    match serde_json::to_value(value).expect("serialize") {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Assert the object has exactly `keys`, in any order.
pub fn assert_keys(object: &serde_json::Map<String, Value>, keys: &[&str]) {
    let mut actual: Vec<&str> = object.keys().map(String::as_str).collect();
    let mut expected = keys.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected);
}
