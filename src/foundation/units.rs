use std::{fmt, ops};

/// Points per unit for the absolute units the argument syntax accepts.
pub const PT_PER_MM: f64 = 72.0 / 25.4;
/// Points per centimeter.
pub const PT_PER_CM: f64 = 72.0 / 2.54;
/// Points per inch.
pub const PT_PER_IN: f64 = 72.0;

/// Absolute length, stored in points.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Length(pub f64);

impl Length {
    /// Zero length.
    pub const ZERO: Length = Length(0.0);

    /// Length in points.
    pub fn pt(v: f64) -> Self {
        Self(v)
    }

    /// Length in millimeters.
    pub fn mm(v: f64) -> Self {
        Self(v * PT_PER_MM)
    }

    /// Length in centimeters.
    pub fn cm(v: f64) -> Self {
        Self(v * PT_PER_CM)
    }

    /// Length in inches.
    pub fn inches(v: f64) -> Self {
        Self(v * PT_PER_IN)
    }

    /// Value in points.
    pub fn to_pt(self) -> f64 {
        self.0
    }

    /// Parse a unit suffix (`pt`, `mm`, `cm`, `in`) applied to `v`.
    pub fn with_unit(v: f64, unit: &str) -> Option<Self> {
        match unit {
            "pt" => Some(Self::pt(v)),
            "mm" => Some(Self::mm(v)),
            "cm" => Some(Self::cm(v)),
            "in" => Some(Self::inches(v)),
            _ => None,
        }
    }
}

impl ops::Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl ops::Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

/// A fraction of some reference length; `1.0` is 100%.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Ratio(pub f64);

impl Ratio {
    /// Zero ratio.
    pub const ZERO: Ratio = Ratio(0.0);

    /// Ratio from a percentage (`50.0` is half).
    pub fn percent(v: f64) -> Self {
        Self(v / 100.0)
    }

    /// Apply the ratio to a reference length in points.
    pub fn of(self, whole: f64) -> f64 {
        self.0 * whole
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 * 100.0)
    }
}

/// A length that may be partially relative: `abs + rel * reference`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rel {
    /// Absolute part.
    #[serde(default)]
    pub abs: Length,
    /// Relative part.
    #[serde(default)]
    pub rel: Ratio,
}

impl Rel {
    /// Zero.
    pub const ZERO: Rel = Rel {
        abs: Length::ZERO,
        rel: Ratio::ZERO,
    };

    /// Purely absolute value.
    pub fn abs(abs: Length) -> Self {
        Self {
            abs,
            rel: Ratio::ZERO,
        }
    }

    /// Purely relative value.
    pub fn rel(rel: Ratio) -> Self {
        Self {
            abs: Length::ZERO,
            rel,
        }
    }

    /// Whether the value has a non-zero relative part.
    pub fn is_relative(self) -> bool {
        self.rel.0 != 0.0
    }

    /// Resolve against `whole` points.
    pub fn relative_to(self, whole: f64) -> f64 {
        self.abs.to_pt() + self.rel.of(whole)
    }
}

impl From<Length> for Rel {
    fn from(value: Length) -> Self {
        Self::abs(value)
    }
}

impl From<Ratio> for Rel {
    fn from(value: Ratio) -> Self {
        Self::rel(value)
    }
}

impl ops::Add for Rel {
    type Output = Rel;

    fn add(self, rhs: Rel) -> Rel {
        Rel {
            abs: self.abs + rhs.abs,
            rel: Ratio(self.rel.0 + rhs.rel.0),
        }
    }
}

impl fmt::Display for Rel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.abs.0 != 0.0, self.rel.0 != 0.0) {
            (true, true) => write!(f, "{} + {}", self.rel, self.abs),
            (false, true) => write!(f, "{}", self.rel),
            _ => write!(f, "{}", self.abs),
        }
    }
}

/// Size along one axis: content-driven (`auto`) or explicit.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sizing {
    /// Size to the body (or zero without one).
    #[default]
    Auto,
    /// Fixed, possibly relative, size.
    Rel(Rel),
}

impl Sizing {
    /// The explicit size, if any.
    pub fn explicit(self) -> Option<Rel> {
        match self {
            Sizing::Auto => None,
            Sizing::Rel(rel) => Some(rel),
        }
    }
}

impl From<Rel> for Sizing {
    fn from(value: Rel) -> Self {
        Sizing::Rel(value)
    }
}

impl From<Length> for Sizing {
    fn from(value: Length) -> Self {
        Sizing::Rel(value.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/units.rs"]
mod tests;
