use serde_json::Value;

pub fn cats_json() -> &'static str {
    r#"{
        "cats": 2,
        "data": [
            {
                "type": "cat",
                "name": "Willow",
                "attributes": { "whiskers": 12 },
                "friends": ["Hitch", "Olive"],
                "meals": [
                    { "day": "monday", "time": "8:30", "type": "dry food" },
                    { "day": "monday", "time": "17:30", "type": "dry food" }
                ]
            },
            {
                "type": "cat",
                "name": "Hitch",
                "attributes": { "whiskers": 15 },
                "friends": ["Willow"],
                "meals": [
                    { "day": "monday", "time": "8:00", "type": "dry food" },
                    { "day": "monday", "time": "18:15", "type": "dry food" }
                ]
            }
        ],
        "meta": {
            "errors": [],
            "response": 200
        }
    }"#
}

pub fn cats() -> Value {
    serde_json::from_str(cats_json()).unwrap()
}
