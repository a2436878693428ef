//! Shape validation of generator output.
//!
//! The input is an untyped `serde_json::Value`. Validation walks the whole
//! tree and records every violation before deciding, so a rejected value
//! comes back with the complete list of problems rather than the first one.
//! There is no coercion: `"4.5"` is not a number and `45` is not a string.
//! Keys outside the record shape are ignored.

use std::fmt;

use serde_json::{Map, Value};

use crate::types::{
    CarManufacturing, CarPricing, CarRatings, CarRecord, CarSpecs, Competitor,
};

type Object = Map<String, Value>;

/// Primitive kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Missing,
    WrongType { expected: JsonKind, found: JsonKind },
    WrongElementType { expected: JsonKind, found: JsonKind },
}

/// One failed check. `path` is dotted with bracketed indices, e.g.
/// `competitors[2].price`; the root value is `$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{}: required field is missing", self.path),
            ViolationKind::WrongType { expected, found } => {
                write!(f, "{}: expected {expected}, found {found}", self.path)
            }
            ViolationKind::WrongElementType { expected, found } => {
                write!(f, "{}: expected array element of type {expected}, found {found}", self.path)
            }
        }
    }
}

/// Every violation found in a rejected value. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.path.as_str())
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.paths().any(|p| p == path)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} shape violation(s)", self.violations.len())?;
        for (i, v) in self.violations.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Validate `value` as a car record.
pub fn validate(value: &Value) -> Result<CarRecord, ValidationFailure> {
    let mut walker = Walker::default();
    let record = walker.record(value);
    match record {
        Some(record) if walker.violations.is_empty() => Ok(record),
        _ => Err(ValidationFailure { violations: walker.violations }),
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() { key.to_string() } else { format!("{parent}.{key}") }
}

#[derive(Default)]
struct Walker {
    violations: Vec<Violation>,
}

impl Walker {
    fn push(&mut self, path: String, kind: ViolationKind) {
        self.violations.push(Violation { path, kind });
    }

    fn wrong_type(&mut self, path: String, expected: JsonKind, found: &Value) {
        self.push(path, ViolationKind::WrongType { expected, found: JsonKind::of(found) });
    }

    fn required<'a>(&mut self, obj: &'a Object, parent: &str, key: &str) -> Option<&'a Value> {
        let value = obj.get(key);
        if value.is_none() {
            self.push(join(parent, key), ViolationKind::Missing);
        }
        value
    }

    fn string(&mut self, obj: &Object, parent: &str, key: &str) -> Option<String> {
        let value = self.required(obj, parent, key)?;
        self.as_string(value, join(parent, key))
    }

    fn as_string(&mut self, value: &Value, path: String) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.wrong_type(path, JsonKind::String, other);
                None
            }
        }
    }

    /// `Some(None)` when absent, `None` when present with the wrong kind.
    fn optional_string(&mut self, obj: &Object, parent: &str, key: &str) -> Option<Option<String>> {
        match obj.get(key) {
            None => Some(None),
            Some(value) => self.as_string(value, join(parent, key)).map(Some),
        }
    }

    fn number(&mut self, obj: &Object, parent: &str, key: &str) -> Option<f64> {
        let value = self.required(obj, parent, key)?;
        match value.as_f64() {
            Some(n) => Some(n),
            _ => {
                self.wrong_type(join(parent, key), JsonKind::Number, value);
                None
            }
        }
    }

    fn object<'a>(&mut self, obj: &'a Object, parent: &str, key: &str) -> Option<&'a Object> {
        let value = self.required(obj, parent, key)?;
        match value {
            Value::Object(inner) => Some(inner),
            other => {
                self.wrong_type(join(parent, key), JsonKind::Object, other);
                None
            }
        }
    }

    fn array<'a>(&mut self, obj: &'a Object, parent: &str, key: &str) -> Option<&'a [Value]> {
        let value = self.required(obj, parent, key)?;
        match value {
            Value::Array(items) => Some(items),
            other => {
                self.wrong_type(join(parent, key), JsonKind::Array, other);
                None
            }
        }
    }

    fn string_list(&mut self, obj: &Object, parent: &str, key: &str) -> Option<Vec<String>> {
        let items = self.array(obj, parent, key)?;
        let path = join(parent, key);
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                other => {
                    ok = false;
                    self.push(
                        format!("{path}[{i}]"),
                        ViolationKind::WrongElementType { expected: JsonKind::String, found: JsonKind::of(other) },
                    );
                }
            }
        }
        ok.then_some(out)
    }

    fn record(&mut self, value: &Value) -> Option<CarRecord> {
        let Value::Object(obj) = value else {
            self.wrong_type("$".to_string(), JsonKind::Object, value);
            return None;
        };

        let name = self.string(obj, "", "name");
        let tagline = self.string(obj, "", "tagline");
        let image_url = self.optional_string(obj, "", "imageUrl");
        let history = self.string(obj, "", "history");
        let achievements = self.string_list(obj, "", "achievements");
        let key_milestones = self.string_list(obj, "", "keyMilestones");
        let innovation_awards = self.string_list(obj, "", "innovationAwards");
        let specs = self.object(obj, "", "specs").and_then(|o| self.specs(o));
        let pricing = self.object(obj, "", "pricing").and_then(|o| self.pricing(o));
        let manufacturing = self.object(obj, "", "manufacturing").and_then(|o| self.manufacturing(o));
        let competitors = self.competitors(obj);
        let ratings = self.object(obj, "", "ratings").and_then(|o| self.ratings(o));

        Some(CarRecord {
            name: name?,
            tagline: tagline?,
            image_url: image_url?,
            history: history?,
            achievements: achievements?,
            key_milestones: key_milestones?,
            innovation_awards: innovation_awards?,
            specs: specs?,
            pricing: pricing?,
            manufacturing: manufacturing?,
            competitors: competitors?,
            ratings: ratings?,
        })
    }

    fn specs(&mut self, obj: &Object) -> Option<CarSpecs> {
        const P: &str = "specs";
        let engine = self.string(obj, P, "engine");
        let power = self.string(obj, P, "power");
        let torque = self.string(obj, P, "torque");
        let top_speed = self.string(obj, P, "topSpeed");
        let acceleration = self.string(obj, P, "acceleration");
        let drive = self.string(obj, P, "drive");
        let range = self.string(obj, P, "range");
        let consumption = self.string(obj, P, "consumption");
        let emissions = self.string(obj, P, "emissions");
        let charging = self.string(obj, P, "charging");
        let battery = self.string(obj, P, "battery");
        Some(CarSpecs {
            engine: engine?,
            power: power?,
            torque: torque?,
            top_speed: top_speed?,
            acceleration: acceleration?,
            drive: drive?,
            range: range?,
            consumption: consumption?,
            emissions: emissions?,
            charging: charging?,
            battery: battery?,
        })
    }

    fn pricing(&mut self, obj: &Object) -> Option<CarPricing> {
        const P: &str = "pricing";
        let usa = self.string(obj, P, "usa");
        let china = self.string(obj, P, "china");
        let india = self.string(obj, P, "india");
        let dubai = self.string(obj, P, "dubai");
        Some(CarPricing { usa: usa?, china: china?, india: india?, dubai: dubai? })
    }

    fn manufacturing(&mut self, obj: &Object) -> Option<CarManufacturing> {
        const P: &str = "manufacturing";
        let manufacturer = self.string(obj, P, "manufacturer");
        let chip_partner = self.optional_string(obj, P, "chipPartner");
        let battery_partner = self.optional_string(obj, P, "batteryPartner");
        let locations = self.string_list(obj, P, "locations");
        Some(CarManufacturing {
            manufacturer: manufacturer?,
            chip_partner: chip_partner?,
            battery_partner: battery_partner?,
            locations: locations?,
        })
    }

    fn competitors(&mut self, obj: &Object) -> Option<Vec<Competitor>> {
        let items = self.array(obj, "", "competitors")?;
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            let path = format!("competitors[{i}]");
            let Value::Object(entry) = item else {
                ok = false;
                self.push(
                    path,
                    ViolationKind::WrongElementType { expected: JsonKind::Object, found: JsonKind::of(item) },
                );
                continue;
            };
            let name = self.string(entry, &path, "name");
            let price = self.string(entry, &path, "price");
            match (name, price) {
                (Some(name), Some(price)) => out.push(Competitor { name, price }),
                _ => ok = false,
            }
        }
        ok.then_some(out)
    }

    fn ratings(&mut self, obj: &Object) -> Option<CarRatings> {
        const P: &str = "ratings";
        let overall = self.number(obj, P, "overall");
        let performance = self.number(obj, P, "performance");
        let technology = self.number(obj, P, "technology");
        let value = self.number(obj, P, "value");
        Some(CarRatings {
            overall: overall?,
            performance: performance?,
            technology: technology?,
            value: value?,
        })
    }
}
