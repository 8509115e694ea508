//! Conversion table and lookup
//!
//! The table is a static, three-level mapping:
//! category → source unit → target unit → [`Conversion`].
//! Only the pairs listed here are supported; there is no symmetry or
//! multi-hop resolution.

use serde::{Deserialize, Serialize};

/// A unary transform from one unit to another.
pub type Transform = fn(f64) -> f64;

/// A single conversion entry.
#[derive(Debug, Clone, Copy)]
pub enum Conversion {
    /// `value * factor`
    Scalar(f64),
    /// Non-linear conversion, e.g. temperature offsets.
    Formula(Transform),
}

impl Conversion {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Conversion::Scalar(factor) => value * factor,
            Conversion::Formula(transform) => transform(value),
        }
    }

    pub fn kind(&self) -> ConversionKind {
        match self {
            Conversion::Scalar(_) => ConversionKind::Scalar,
            Conversion::Formula(_) => ConversionKind::Formula,
        }
    }

    pub fn factor(&self) -> Option<f64> {
        match self {
            Conversion::Scalar(factor) => Some(*factor),
            Conversion::Formula(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionKind {
    Scalar,
    Formula,
}

#[derive(Debug)]
pub struct Target {
    pub unit: &'static str,
    pub conversion: Conversion,
}

#[derive(Debug)]
pub struct Unit {
    pub name: &'static str,
    pub targets: &'static [Target],
}

impl Unit {
    pub fn target(&self, unit: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.unit == unit)
    }

    pub fn target_names(&self) -> Vec<&'static str> {
        self.targets.iter().map(|t| t.unit).collect()
    }
}

#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub units: &'static [Unit],
}

impl Category {
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name).collect()
    }
}

/// Immutable lookup table. See [`TABLE`] for the built-in one.
#[derive(Debug)]
pub struct ConversionTable {
    categories: &'static [Category],
}

impl ConversionTable {
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn category(&self, name: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.name).collect()
    }

    /// Resolves the entry for `category`/`from_unit`/`to_unit`.
    pub fn lookup(&self, category: &str, from_unit: &str, to_unit: &str) -> Option<Conversion> {
        self.category(category)?
            .unit(from_unit)?
            .target(to_unit)
            .map(|t| t.conversion)
    }

    /// Converts `value`, or returns `None` when the pair is not in the table.
    pub fn convert(&self, value: f64, category: &str, from_unit: &str, to_unit: &str) -> Option<f64> {
        self.lookup(category, from_unit, to_unit)
            .map(|conversion| conversion.apply(value))
    }

    pub fn apply(&self, request: &ConversionRequest) -> Option<f64> {
        self.convert(
            request.value,
            &request.category,
            &request.from_unit,
            &request.to_unit,
        )
    }

    /// Serializable description of every entry, in declaration order.
    pub fn listing(&self) -> Vec<CategoryListing> {
        self.categories
            .iter()
            .map(|category| CategoryListing {
                name: category.name.to_string(),
                units: category
                    .units
                    .iter()
                    .map(|unit| UnitListing {
                        name: unit.name.to_string(),
                        targets: unit
                            .targets
                            .iter()
                            .map(|target| TargetListing {
                                unit: target.unit.to_string(),
                                kind: target.conversion.kind(),
                                factor: target.conversion.factor(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryListing {
    pub name: String,
    pub units: Vec<UnitListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitListing {
    pub name: String,
    pub targets: Vec<TargetListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetListing {
    pub unit: String,
    pub kind: ConversionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
}

/// One conversion asked for by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(
        category: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            category: category.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            value,
        }
    }
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    (c * 9.0 / 5.0) + 32.0
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0 + 273.15
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    (k - 273.15) * 9.0 / 5.0 + 32.0
}

const fn scalar(unit: &'static str, factor: f64) -> Target {
    Target {
        unit,
        conversion: Conversion::Scalar(factor),
    }
}

const fn formula(unit: &'static str, transform: Transform) -> Target {
    Target {
        unit,
        conversion: Conversion::Formula(transform),
    }
}

/// The built-in table.
pub static TABLE: ConversionTable = ConversionTable {
    categories: &[
        Category {
            name: "Length",
            units: &[
                Unit {
                    name: "Meters",
                    targets: &[
                        scalar("Kilometers", 0.001),
                        scalar("Miles", 0.000621371),
                        scalar("Feet", 3.28084),
                    ],
                },
                Unit {
                    name: "Kilometers",
                    targets: &[
                        scalar("Meters", 1000.0),
                        scalar("Miles", 0.621371),
                        scalar("Feet", 3280.84),
                    ],
                },
                Unit {
                    name: "Miles",
                    targets: &[
                        scalar("Meters", 1609.34),
                        scalar("Kilometers", 1.60934),
                        scalar("Feet", 5280.0),
                    ],
                },
                Unit {
                    name: "Feet",
                    targets: &[
                        scalar("Meters", 0.3048),
                        scalar("Kilometers", 0.0003048),
                        scalar("Miles", 0.000189394),
                    ],
                },
            ],
        },
        Category {
            name: "Weight",
            units: &[
                Unit {
                    name: "Kilograms",
                    targets: &[scalar("Grams", 1000.0), scalar("Pounds", 2.20462)],
                },
                Unit {
                    name: "Grams",
                    targets: &[scalar("Kilograms", 0.001), scalar("Pounds", 0.00220462)],
                },
                Unit {
                    name: "Pounds",
                    targets: &[scalar("Kilograms", 0.453592), scalar("Grams", 453.592)],
                },
            ],
        },
        Category {
            name: "Temperature",
            units: &[
                Unit {
                    name: "Celsius",
                    targets: &[
                        formula("Fahrenheit", celsius_to_fahrenheit),
                        formula("Kelvin", celsius_to_kelvin),
                    ],
                },
                Unit {
                    name: "Fahrenheit",
                    targets: &[
                        formula("Celsius", fahrenheit_to_celsius),
                        formula("Kelvin", fahrenheit_to_kelvin),
                    ],
                },
                Unit {
                    name: "Kelvin",
                    targets: &[
                        formula("Celsius", kelvin_to_celsius),
                        formula("Fahrenheit", kelvin_to_fahrenheit),
                    ],
                },
            ],
        },
    ],
};

/// Converts with the built-in [`TABLE`].
pub fn convert(value: f64, category: &str, from_unit: &str, to_unit: &str) -> Option<f64> {
    TABLE.convert(value, category, from_unit, to_unit)
}
