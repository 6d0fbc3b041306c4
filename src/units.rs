//! Linear unit resolution
//!
//! CAD exports are inconsistent about units: headers may be missing or plainly
//! wrong (meters on a 100 mm board), and some toolchains emit thousandths of
//! an inch without saying so. The resolver combines an explicit override, a
//! sanity-checked declared unit, and a magnitude heuristic into one scale
//! factor to millimeters.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::Serialize;

/// Largest plausible board extent in mm; a declared unit that scales the
/// drawing beyond this is considered mis-declared
const MAX_BOARD_EXTENT_MM: f64 = 5000.0;

/// Raw extents above this are assumed to be in mils rather than mm
const MIL_EXTENT_THRESHOLD: f64 = 500.0;

/// A linear drawing unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    Mm,
    Cm,
    M,
    In,
    Ft,
    Mil,
    Um,
    Uin,
    Yd,
}

impl Unit {
    /// Conversion factor from this unit to millimeters
    pub fn to_mm(self) -> f64 {
        match self {
            Unit::Mm => 1.0,
            Unit::Cm => 10.0,
            Unit::M => 1000.0,
            Unit::In => 25.4,
            Unit::Ft => 304.8,
            Unit::Mil => 0.0254,
            Unit::Um => 0.001,
            Unit::Uin => 0.0000254,
            Unit::Yd => 914.4,
        }
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(Unit::Mm),
            "cm" => Ok(Unit::Cm),
            "m" => Ok(Unit::M),
            "in" => Ok(Unit::In),
            "ft" => Ok(Unit::Ft),
            "mil" => Ok(Unit::Mil),
            "um" | "μm" => Ok(Unit::Um),
            "uin" | "μin" => Ok(Unit::Uin),
            "yd" => Ok(Unit::Yd),
            other => bail!("unknown unit '{}'", other),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::M => "m",
            Unit::In => "in",
            Unit::Ft => "ft",
            Unit::Mil => "mil",
            Unit::Um => "um",
            Unit::Uin => "uin",
            Unit::Yd => "yd",
        };
        f.write_str(name)
    }
}

/// Determine the unit-to-mm conversion factor for a drawing
///
/// Priority:
/// 1. A forced unit from the caller always wins.
/// 2. A declared unit is accepted only if it keeps the largest bounding-box
///    axis at or under 5000 mm.
/// 3. Otherwise a magnitude heuristic: raw extents over 500 are read as mils,
///    smaller ones as mm.
///
/// `raw_extent` is the largest bounding-box axis in the drawing's own (still
/// unscaled) values; 0 means there is no geometry, which defaults to mm.
pub fn resolve_unit_scale(forced: Option<Unit>, declared: Option<Unit>, raw_extent: f64) -> f64 {
    if let Some(unit) = forced {
        return unit.to_mm();
    }

    if let Some(unit) = declared {
        let scale = unit.to_mm();
        if raw_extent * scale <= MAX_BOARD_EXTENT_MM {
            return scale;
        }
        // Declared unit fails the sanity check; fall through to the heuristic
    }

    if raw_extent == 0.0 {
        return 1.0;
    }

    if raw_extent > MIL_EXTENT_THRESHOLD {
        Unit::Mil.to_mm()
    } else {
        1.0
    }
}
