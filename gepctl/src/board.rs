//! Board variants and their toolchain profiles.
//!
//! The GEP sketch runs on two hardware targets: a bare Arduino Nano
//! wired per Ben Eater's design, and an Arduino Mega carrying the GEP
//! shield. Each variant maps to a fixed FQBN and, for the Mega, an
//! extra compile-time define that selects the shield pin driver.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported board variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Board {
    /// Arduino Nano (old bootloader ATmega328).
    Nano,
    /// Arduino Mega with the GEP shield (default).
    #[default]
    Mega,
}

impl Board {
    /// All supported variants, in listing order.
    pub const ALL: [Self; 2] = [Self::Nano, Self::Mega];

    /// Fully-qualified board name consumed by `arduino-cli --fqbn`.
    #[must_use]
    pub fn fqbn(&self) -> &'static str {
        match self {
            Self::Nano => "arduino:avr:nano:cpu=atmega328old",
            Self::Mega => "arduino:avr:mega",
        }
    }

    /// Extra compile flag for this variant, if any.
    ///
    /// The Mega build defines `MEGA_SHIELD` so the sketch selects the
    /// shield's direct ZIF-socket pin driver instead of the Nano's
    /// shift-register wiring.
    #[must_use]
    pub fn extra_build_flag(&self) -> Option<&'static str> {
        match self {
            Self::Nano => None,
            Self::Mega => Some("-DMEGA_SHIELD"),
        }
    }

    /// Short lowercase name used in directory names and config files.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nano => "nano",
            Self::Mega => "mega",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nano" => Ok(Self::Nano),
            "mega" => Ok(Self::Mega),
            other => Err(Error::UnknownBoard(other.to_string())),
        }
    }
}
