use serde_json::{json, Value};

use carinfo_core::fallback::is_placeholder;
use carinfo_core::schema::{JsonKind, ViolationKind};
use carinfo_core::{fallback_record, validate};

fn model_s() -> Value {
    json!({
        "name": "Tesla Model S",
        "tagline": "The original long-range luxury EV",
        "imageUrl": "https://images.unsplash.com/photo-1617788138017?w=1200&q=80",
        "history": "Launched in 2012, the Model S proved electric cars could be desirable.",
        "achievements": ["Motor Trend Car of the Year 2013", "Longest range EV at launch"],
        "keyMilestones": ["2012: Deliveries begin", "2021: Plaid refresh"],
        "innovationAwards": ["World Green Car 2013"],
        "specs": {
            "engine": "Tri-motor electric",
            "power": "1,020 hp",
            "torque": "1,050 lb-ft",
            "topSpeed": "200 mph",
            "acceleration": "1.99 s 0-60 mph",
            "drive": "AWD",
            "range": "396 mi (EPA)",
            "consumption": "28 kWh/100 mi",
            "emissions": "0 g/km",
            "charging": "250 kW Supercharging",
            "battery": "100 kWh"
        },
        "pricing": {
            "usa": "$74,990",
            "china": "¥698,900",
            "india": "₹1.5 Cr (import)",
            "dubai": "AED 375,000"
        },
        "manufacturing": {
            "manufacturer": "Tesla, Inc.",
            "chipPartner": "Samsung",
            "batteryPartner": "Panasonic",
            "locations": ["Fremont, California"]
        },
        "competitors": [
            {"name": "Porsche Taycan", "price": "$90,900"},
            {"name": "Lucid Air", "price": "$69,900"}
        ],
        "ratings": {"overall": 4.6, "performance": 9.7, "technology": 9.1, "value": 7}
    })
}

fn remove(value: &mut Value, pointer: &str) {
    let (parent, key) = pointer.rsplit_once('/').expect("pointer has a parent");
    value
        .pointer_mut(parent)
        .and_then(Value::as_object_mut)
        .expect("parent object")
        .remove(key);
}

#[test]
fn valid_record_is_accepted() {
    let record = validate(&model_s()).expect("valid record");
    assert_eq!(record.name, "Tesla Model S");
    assert_eq!(record.specs.top_speed, "200 mph");
    assert_eq!(record.manufacturing.chip_partner.as_deref(), Some("Samsung"));
    assert_eq!(record.competitors[1].name, "Lucid Air");
    assert!((record.ratings.value - 7.0).abs() < f64::EPSILON, "integer ratings are numbers");
}

#[test]
fn accepted_record_serializes_back_to_the_same_shape() {
    let input = model_s();
    let record = validate(&input).expect("valid record");
    let output = serde_json::to_value(&record).expect("serialize");
    assert_eq!(output["specs"], input["specs"]);
    assert_eq!(output["manufacturing"], input["manufacturing"]);
    assert_eq!(output["competitors"], input["competitors"]);
    assert_eq!(validate(&output).expect("revalidate"), record);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut input = model_s();
    input["extra"] = json!({"anything": [1, 2, 3]});
    input["specs"]["horsepowerNumeric"] = json!(1020);
    assert!(validate(&input).is_ok());
}

#[test]
fn optional_fields_may_be_absent() {
    let mut input = model_s();
    remove(&mut input, "/imageUrl");
    remove(&mut input, "/manufacturing/chipPartner");
    remove(&mut input, "/manufacturing/batteryPartner");
    let record = validate(&input).expect("optional fields omitted");
    assert_eq!(record.image_url, None);
    assert_eq!(record.manufacturing.chip_partner, None);

    let output = serde_json::to_value(&record).expect("serialize");
    assert!(output.get("imageUrl").is_none(), "absent optionals are not serialized as null");
    assert!(output["manufacturing"].get("batteryPartner").is_none());
}

#[test]
fn optional_field_with_wrong_kind_is_rejected() {
    let mut input = model_s();
    input["manufacturing"]["chipPartner"] = json!(42);
    let failure = validate(&input).expect_err("chipPartner must be a string");
    assert_eq!(failure.violations.len(), 1);
    assert_eq!(failure.violations[0].path, "manufacturing.chipPartner");
    assert_eq!(
        failure.violations[0].kind,
        ViolationKind::WrongType { expected: JsonKind::String, found: JsonKind::Number }
    );
}

#[test]
fn null_optional_is_rejected() {
    let mut input = model_s();
    input["imageUrl"] = Value::Null;
    let failure = validate(&input).expect_err("null is not a string");
    assert!(failure.contains_path("imageUrl"));
}

#[test]
fn missing_ratings_is_reported() {
    let mut input = model_s();
    remove(&mut input, "/ratings");
    let failure = validate(&input).expect_err("ratings required");
    assert_eq!(failure.violations.len(), 1);
    assert_eq!(failure.violations[0].kind, ViolationKind::Missing);
    assert_eq!(failure.violations[0].path, "ratings");
}

#[test]
fn no_coercion_between_text_and_numbers() {
    let mut input = model_s();
    input["ratings"]["overall"] = json!("4.6");
    input["pricing"]["usa"] = json!(74990);
    let failure = validate(&input).expect_err("strict kinds");
    assert!(failure.contains_path("ratings.overall"));
    assert!(failure.contains_path("pricing.usa"));
}

#[test]
fn every_violation_is_collected() {
    let mut input = model_s();
    remove(&mut input, "/name");
    remove(&mut input, "/specs/battery");
    input["achievements"] = json!(["ok", 3, null]);
    input["competitors"] = json!([{"name": "Lucid Air"}, "Taycan", {"name": 1, "price": "$1"}]);
    input["ratings"]["value"] = json!(true);
    input["manufacturing"]["locations"] = json!("Fremont");

    let failure = validate(&input).expect_err("many problems");
    let mut paths: Vec<&str> = failure.paths().collect();
    paths.sort_unstable();
    assert_eq!(
        paths,
        vec![
            "achievements[1]",
            "achievements[2]",
            "competitors[0].price",
            "competitors[1]",
            "competitors[2].name",
            "manufacturing.locations",
            "name",
            "ratings.value",
            "specs.battery",
        ]
    );
    let element = failure
        .violations
        .iter()
        .find(|v| v.path == "competitors[1]")
        .expect("element violation");
    assert_eq!(
        element.kind,
        ViolationKind::WrongElementType { expected: JsonKind::Object, found: JsonKind::String }
    );
}

#[test]
fn nested_object_of_wrong_kind_is_one_violation() {
    let mut input = model_s();
    input["specs"] = json!(["engine"]);
    let failure = validate(&input).expect_err("specs must be an object");
    assert_eq!(failure.violations.len(), 1);
    assert_eq!(failure.violations[0].path, "specs");
}

#[test]
fn non_object_root_is_rejected() {
    for root in [json!([]), json!("Tesla"), json!(3), Value::Null] {
        let failure = validate(&root).expect_err("root must be an object");
        assert_eq!(failure.violations.len(), 1);
        assert_eq!(failure.violations[0].path, "$");
    }
}

#[test]
fn empty_object_reports_every_required_field() {
    let failure = validate(&json!({})).expect_err("empty object");
    assert_eq!(failure.violations.len(), 11, "eleven required top-level fields");
    assert!(failure.violations.iter().all(|v| v.kind == ViolationKind::Missing));
    assert!(!failure.contains_path("imageUrl"));
}

#[test]
fn failure_message_lists_violations() {
    let mut input = model_s();
    remove(&mut input, "/tagline");
    let message = validate(&input).expect_err("missing tagline").to_string();
    assert!(message.starts_with("1 shape violation(s)"), "{message}");
    assert!(message.contains("tagline: required field is missing"), "{message}");
}

#[test]
fn fallback_output_always_validates() {
    for query in ["Toyota Camry", "bmw m3", "", "  spaced  ", "名爵 MG4", "\"quoted\" {json}"] {
        let record = fallback_record(query);
        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(validate(&value).expect("fallback is schema-valid"), record);
        assert!(is_placeholder(&record));
    }
}

#[test]
fn fallback_is_deterministic_and_marked() {
    let a = fallback_record("Toyota Camry");
    let b = fallback_record("Toyota Camry");
    assert_eq!(a, b);
    assert_eq!(a.name, "Toyota Camry (Demo Data)");
    assert!(a.history.contains("Toyota Camry"));
    assert_eq!(a.competitors.len(), 4);
    assert!(!is_placeholder(&validate(&model_s()).expect("valid")));
}
