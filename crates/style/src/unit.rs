//! A magnitude that is either absolute or a percentage of a reference length.
use crate::parsers::{parse_unit, run_parser, StyleParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitKind {
    #[default]
    Absolute,
    Percent,
}

impl UnitKind {
    /// Maps a unit suffix to its kind. Anything other than `%` is absolute.
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "%" => UnitKind::Percent,
            _ => UnitKind::Absolute,
        }
    }
}

/// A raw unit value as written in a layout descriptor: either a bare number or
/// a unit string like `"10px"` or `"25%"`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum UnitValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitValue::Number(n) => write!(f, "{}", n),
            UnitValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for UnitValue {
    fn from(s: &str) -> Self {
        UnitValue::Text(s.to_string())
    }
}

impl From<String> for UnitValue {
    fn from(s: String) -> Self {
        UnitValue::Text(s)
    }
}

impl From<f64> for UnitValue {
    fn from(n: f64) -> Self {
        UnitValue::Number(n)
    }
}

impl From<f32> for UnitValue {
    fn from(n: f32) -> Self {
        UnitValue::Number(n as f64)
    }
}

impl From<i32> for UnitValue {
    fn from(n: i32) -> Self {
        UnitValue::Number(n as f64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Unit {
    magnitude: f32,
    kind: UnitKind,
}

impl Unit {
    /// An unset unit: absolute zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn px(magnitude: f32) -> Self {
        Self {
            magnitude,
            kind: UnitKind::Absolute,
        }
    }

    pub fn percent(magnitude: f32) -> Self {
        Self {
            magnitude,
            kind: UnitKind::Percent,
        }
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Sets the unit from a descriptor value.
    ///
    /// Numbers go through their textual form, so `12.7` becomes `12` and `-5`
    /// becomes `5`. A value without any digit leaves the unit untouched.
    pub fn set_value(&mut self, value: impl Into<UnitValue>) {
        let text = value.into().to_string();
        if let Ok((magnitude, kind)) = run_parser(parse_unit, &text) {
            self.magnitude = magnitude;
            self.kind = kind;
        }
    }

    /// Resolves the unit. Percentages need a reference length and are zero
    /// without one.
    pub fn get_value(&self, reference: Option<f32>) -> f32 {
        match (self.kind, reference) {
            (UnitKind::Absolute, _) => self.magnitude,
            (UnitKind::Percent, Some(reference)) => self.magnitude * reference / 100.0,
            (UnitKind::Percent, None) => 0.0,
        }
    }

    /// Shorthand for [`Unit::get_value`] with a reference length.
    pub fn resolve(&self, reference: f32) -> f32 {
        self.get_value(Some(reference))
    }
}

impl FromStr for Unit {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (magnitude, kind) = run_parser(parse_unit, s)?;
        Ok(Self { magnitude, kind })
    }
}

impl From<f32> for Unit {
    fn from(value: f32) -> Self {
        let mut unit = Unit::new();
        unit.set_value(value);
        unit
    }
}

impl From<&UnitValue> for Unit {
    fn from(value: &UnitValue) -> Self {
        let mut unit = Unit::new();
        unit.set_value(value.clone());
        unit
    }
}
