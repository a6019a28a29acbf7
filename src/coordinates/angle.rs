//! # Angle Normalization Module
//!
//! This module wraps azimuth angles into one of the two presentation
//! domains offered by the visualizer's settings panel.
//!
//! ## The Two Domains
//!
//! - `ZeroToTwoPi` presents azimuths in `[0, 2π)`, the "0° to 360°"
//!   convention used by compass-style readouts.
//! - `NegPiToPi` presents azimuths in `(−π, π]`, the "−180° to 180°"
//!   convention matching `atan2` output.
//!
//! ## Normalization Algorithm
//!
//! Normalization is a remainder followed by a single branch correction:
//!
//! ```text
//! wrapped = theta % 2π          (f64 remainder, sign of the dividend)
//! [0, 2π):  wrapped < 0   →  wrapped + 2π
//! (−π, π]:  wrapped >  π  →  wrapped − 2π
//!           wrapped < −π  →  wrapped + 2π
//! ```
//!
//! The branch form keeps one wrap per call and leaves in-domain values
//! untouched, so normalization is idempotent. Non-finite inputs come out
//! as NaN (the remainder of NaN or ±∞ is NaN) rather than raising errors.
//!
//! ## Examples
//!
//! ```rust
//! use axiscope::coordinates::angle::AngleDomain;
//! use std::f64::consts::PI;
//!
//! // -π/2 presented on the compass dial is 3π/2
//! let wrapped = AngleDomain::ZeroToTwoPi.normalize(-PI / 2.0);
//! assert!((wrapped - 3.0 * PI / 2.0).abs() < 1e-12);
//!
//! // 3π/2 presented on the signed dial is -π/2
//! let wrapped = AngleDomain::NegPiToPi.normalize(3.0 * PI / 2.0);
//! assert!((wrapped + PI / 2.0).abs() < 1e-12);
//! ```

use crate::constants::TAU;
use std::f64::consts::PI;
use std::fmt;

/// Presentation domain for azimuth angles
///
/// Every conversion that produces an azimuth takes one of these so the
/// readouts and the theta sliders agree on the wrap convention. The serde
/// names (`"0-360"` / `"-180-180"`) are the wire values the settings
/// panel persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AngleDomain {
    /// Azimuths wrapped into `[0, 2π)`
    #[serde(rename = "0-360")]
    ZeroToTwoPi,
    /// Azimuths wrapped into `(−π, π]`
    #[serde(rename = "-180-180")]
    NegPiToPi,
}

impl AngleDomain {
    /// Wraps `theta` (radians) into this domain
    ///
    /// Uses the remainder-plus-branch form described in the module docs.
    /// At most one full turn is added or removed, and values already in
    /// the domain pass through bit-identical, so the operation is
    /// idempotent.
    ///
    /// # Edge behavior
    ///
    /// - `normalize(−π)` under `NegPiToPi` returns `−π`: the remainder
    ///   keeps the dividend's sign and the correction branch only fires
    ///   strictly beyond ±π.
    /// - NaN and ±∞ inputs produce NaN outputs. No panic, no error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::angle::AngleDomain;
    /// use std::f64::consts::PI;
    ///
    /// let five_turns = AngleDomain::ZeroToTwoPi.normalize(5.0 * PI);
    /// assert!((five_turns - PI).abs() < 1e-12);
    ///
    /// assert!(AngleDomain::NegPiToPi.normalize(f64::NAN).is_nan());
    /// ```
    pub fn normalize(self, theta: f64) -> f64 {
        let mut wrapped = theta % TAU;
        match self {
            AngleDomain::ZeroToTwoPi => {
                if wrapped < 0.0 {
                    wrapped += TAU;
                }
            }
            AngleDomain::NegPiToPi => {
                if wrapped > PI {
                    wrapped -= TAU;
                } else if wrapped < -PI {
                    wrapped += TAU;
                }
            }
        }
        wrapped
    }

    /// Returns true when `theta` already lies in this domain
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::angle::AngleDomain;
    /// use std::f64::consts::PI;
    ///
    /// assert!(AngleDomain::ZeroToTwoPi.contains(PI));
    /// assert!(!AngleDomain::ZeroToTwoPi.contains(-PI / 4.0));
    /// assert!(AngleDomain::NegPiToPi.contains(PI));
    /// assert!(!AngleDomain::NegPiToPi.contains(-PI));
    /// ```
    pub fn contains(self, theta: f64) -> bool {
        match self {
            AngleDomain::ZeroToTwoPi => (0.0..TAU).contains(&theta),
            AngleDomain::NegPiToPi => -PI < theta && theta <= PI,
        }
    }

    /// Slider bounds for this domain, in degrees
    ///
    /// The theta sliders are labelled in degrees, so the widget layer
    /// asks the domain for its `(min, max)` rather than converting the
    /// radian endpoints itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::angle::AngleDomain;
    ///
    /// assert_eq!(AngleDomain::ZeroToTwoPi.degree_bounds(), (0.0, 360.0));
    /// assert_eq!(AngleDomain::NegPiToPi.degree_bounds(), (-180.0, 180.0));
    /// ```
    pub fn degree_bounds(self) -> (f64, f64) {
        match self {
            AngleDomain::ZeroToTwoPi => (0.0, 360.0),
            AngleDomain::NegPiToPi => (-180.0, 180.0),
        }
    }
}

impl Default for AngleDomain {
    fn default() -> Self {
        AngleDomain::ZeroToTwoPi
    }
}

impl fmt::Display for AngleDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleDomain::ZeroToTwoPi => write!(f, "0° to 360°"),
            AngleDomain::NegPiToPi => write!(f, "-180° to 180°"),
        }
    }
}

impl std::str::FromStr for AngleDomain {
    type Err = String;

    /// Parses the wire names, `"0-360"` and `"-180-180"`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "0-360" => Ok(AngleDomain::ZeroToTwoPi),
            "-180-180" => Ok(AngleDomain::NegPiToPi),
            other => Err(format!("unknown angle domain '{}'", other)),
        }
    }
}
