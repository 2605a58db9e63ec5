#![forbid(unsafe_code)]

//! Ten-step tint/shade scale derivation from a single brand color.
//!
//! [`ColorScale::derive`] expands one brand color into the classic
//! 50–900 ramp: steps below 500 blend toward white, 500 is the brand
//! color itself, steps above 500 blend toward black. The whole scale is
//! recomputed from scratch on every derivation; entries are never
//! patched individually.
//!
//! # Example
//! ```
//! use fdeck_style::{ColorScale, Rgb, ScaleStep};
//!
//! let brand = Rgb::from_hex("#6366F1").unwrap();
//! let scale = ColorScale::derive(brand);
//!
//! // The midpoint is the brand color, untouched.
//! assert_eq!(scale.get(ScaleStep::S500), brand);
//! ```

use crate::color::Rgb;

/// The ten keys of a derived color scale, lightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleStep {
    /// Lightest tint (key 50).
    S50,
    /// Key 100.
    S100,
    /// Key 200.
    S200,
    /// Key 300.
    S300,
    /// Key 400.
    S400,
    /// The brand color itself (key 500).
    S500,
    /// Key 600.
    S600,
    /// Key 700.
    S700,
    /// Key 800.
    S800,
    /// Darkest shade (key 900).
    S900,
}

/// How a step's color is produced from the brand color.
enum Blend {
    /// Blend toward white by the given factor.
    Tint(f64),
    /// The brand color unchanged.
    Identity,
    /// Blend toward black by the given factor.
    Shade(f64),
}

impl ScaleStep {
    /// All steps in ascending key order.
    pub const ALL: [Self; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// Numeric key (50–900).
    #[must_use]
    pub const fn key(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
        }
    }

    /// Step for a numeric key, `None` if the key is not part of the scale.
    #[must_use]
    pub const fn from_key(key: u16) -> Option<Self> {
        match key {
            50 => Some(Self::S50),
            100 => Some(Self::S100),
            200 => Some(Self::S200),
            300 => Some(Self::S300),
            400 => Some(Self::S400),
            500 => Some(Self::S500),
            600 => Some(Self::S600),
            700 => Some(Self::S700),
            800 => Some(Self::S800),
            900 => Some(Self::S900),
            _ => None,
        }
    }

    /// Key as the string used in variable names (`"50"` … `"900"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
        }
    }

    /// Position within [`ScaleStep::ALL`].
    const fn index(self) -> usize {
        match self {
            Self::S50 => 0,
            Self::S100 => 1,
            Self::S200 => 2,
            Self::S300 => 3,
            Self::S400 => 4,
            Self::S500 => 5,
            Self::S600 => 6,
            Self::S700 => 7,
            Self::S800 => 8,
            Self::S900 => 9,
        }
    }

    /// Blend recipe for this step.
    const fn blend(self) -> Blend {
        match self {
            Self::S50 => Blend::Tint(0.95),
            Self::S100 => Blend::Tint(0.90),
            Self::S200 => Blend::Tint(0.80),
            Self::S300 => Blend::Tint(0.60),
            Self::S400 => Blend::Tint(0.40),
            Self::S500 => Blend::Identity,
            Self::S600 => Blend::Shade(0.10),
            Self::S700 => Blend::Shade(0.20),
            Self::S800 => Blend::Shade(0.30),
            Self::S900 => Blend::Shade(0.40),
        }
    }
}

/// An ordered, total mapping from scale steps to derived colors.
///
/// All ten entries are always present; the midpoint entry is exactly
/// the brand color the scale was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorScale {
    entries: [Rgb; 10],
}

impl ColorScale {
    /// Derive the full scale from a brand color.
    ///
    /// Pure and deterministic: equal inputs produce identical scales.
    #[must_use]
    pub fn derive(base: Rgb) -> Self {
        let mut entries = [base; 10];
        for step in Self::steps() {
            entries[step.index()] = match step.blend() {
                Blend::Tint(factor) => base.toward_white(factor),
                Blend::Identity => base,
                Blend::Shade(factor) => base.toward_black(factor),
            };
        }
        Self { entries }
    }

    /// All steps in ascending key order.
    #[must_use]
    pub const fn steps() -> [ScaleStep; 10] {
        ScaleStep::ALL
    }

    /// Color at the given step.
    #[must_use]
    pub const fn get(self, step: ScaleStep) -> Rgb {
        self.entries[step.index()]
    }

    /// The brand color the scale was derived from (the 500 step).
    #[must_use]
    pub const fn base(self) -> Rgb {
        self.get(ScaleStep::S500)
    }

    /// Entries in ascending key order.
    pub fn entries(self) -> impl Iterator<Item = (ScaleStep, Rgb)> {
        ScaleStep::ALL.into_iter().map(move |step| (step, self.get(step)))
    }

    /// The ten presentation variables the UI binds to.
    ///
    /// Names follow the `color-primary-<key>` contract; these exact
    /// strings are public API for every styling consumer. Values are
    /// uppercase `#RRGGBB`.
    #[must_use]
    pub fn css_variables(self) -> Vec<(String, String)> {
        self.entries()
            .map(|(step, color)| {
                (format!("color-primary-{}", step.as_str()), color.to_hex())
            })
            .collect()
    }
}
