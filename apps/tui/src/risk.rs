//! Risk classification: maps a score in `[0, 1]` to a severity tier and marker color.
//!
//! The comparison chain is evaluated top-down and the first match wins, so the
//! boundaries 0.4, 0.6 and 0.8 resolve to the higher tier. Scores outside the
//! unit range are not clamped: anything below 0.4 (negatives, NaN) lands in
//! `Low`, anything at or above 0.8 lands in `Critical`.

use crate::domain::Tier;
use serde::Serialize;
use std::fmt;

pub const CRITICAL_THRESHOLD: f64 = 0.8;
pub const HIGH_THRESHOLD: f64 = 0.6;
pub const MODERATE_THRESHOLD: f64 = 0.4;

/// An sRGB color attached to a marker or badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RiskColor {
    pub const RED: Self = Self::new(0xff, 0x00, 0x00);
    pub const ORANGE: Self = Self::new(0xff, 0xa5, 0x00);
    pub const YELLOW: Self = Self::new(0xff, 0xff, 0x00);
    pub const GREEN: Self = Self::new(0x00, 0xff, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for RiskColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Tier {
    pub const fn color(self) -> RiskColor {
        match self {
            Self::Critical => RiskColor::RED,
            Self::High => RiskColor::ORANGE,
            Self::Moderate => RiskColor::YELLOW,
            Self::Low => RiskColor::GREEN,
        }
    }
}

pub fn tier_for(score: f64) -> Tier {
    if score >= CRITICAL_THRESHOLD {
        Tier::Critical
    } else if score >= HIGH_THRESHOLD {
        Tier::High
    } else if score >= MODERATE_THRESHOLD {
        Tier::Moderate
    } else {
        Tier::Low
    }
}

pub fn color_for(score: f64) -> RiskColor {
    tier_for(score).color()
}
