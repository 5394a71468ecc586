//! The signal facets: externally driven discrete state.
//!
//! Two channels share this module but not a type: the stage of the traffic
//! light *governing* an actor, and the light set the actor itself *emits*.
//! Earlier designs reused one type for both; they are kept distinct here so
//! the compiler rejects writing a governing-signal value into the emitted
//! channel and vice versa.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Stage of the traffic light currently governing an actor.
///
/// `Off` covers both a disabled signal head and "no signal governs this
/// actor".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLightStage {
    /// Stop.
    Red,
    /// Prepare to stop.
    Yellow,
    /// Proceed.
    Green,
    /// No governing signal, or the signal head is disabled.
    #[default]
    Off,
}

impl TrafficLightStage {
    /// Returns true when the stage requires the actor to hold.
    #[must_use]
    pub const fn requires_stop(self) -> bool {
        matches!(self, Self::Red)
    }
}

impl fmt::Display for TrafficLightStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Off => "off",
        };
        write!(f, "{name}")
    }
}

/// Set of lights an actor is currently emitting.
///
/// Bit-set semantics over a `u32`, with one bit per lamp. Fixed at
/// registration: the vehicle controller supplies it when the actor is added
/// and reads it thereafter; revising it means re-registering the actor.
///
/// # Examples
///
/// ```
/// use simstate::VehicleLightState;
///
/// let lights = VehicleLightState::BRAKE | VehicleLightState::LEFT_BLINKER;
/// assert!(lights.contains(VehicleLightState::BRAKE));
/// assert!(!lights.contains(VehicleLightState::REVERSE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleLightState(u32);

impl VehicleLightState {
    /// No lights.
    pub const NONE: Self = Self(0);
    /// Position/parking lights.
    pub const POSITION: Self = Self(1);
    /// Low-beam headlights.
    pub const LOW_BEAM: Self = Self(1 << 1);
    /// High-beam headlights.
    pub const HIGH_BEAM: Self = Self(1 << 2);
    /// Brake lights.
    pub const BRAKE: Self = Self(1 << 3);
    /// Right turn indicator.
    pub const RIGHT_BLINKER: Self = Self(1 << 4);
    /// Left turn indicator.
    pub const LEFT_BLINKER: Self = Self(1 << 5);
    /// Reversing lights.
    pub const REVERSE: Self = Self(1 << 6);
    /// Fog lights.
    pub const FOG: Self = Self(1 << 7);
    /// Interior cabin light.
    pub const INTERIOR: Self = Self(1 << 8);
    /// Vehicle-specific special light 1 (e.g. sirens).
    pub const SPECIAL_1: Self = Self(1 << 9);
    /// Vehicle-specific special light 2.
    pub const SPECIAL_2: Self = Self(1 << 10);
    /// Every light bit set.
    pub const ALL: Self = Self(u32::MAX);

    /// Creates a light state from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bit pattern.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if every bit in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no lights are on.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns this state with the lights in `other` added.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns this state with the lights in `other` removed.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for VehicleLightState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for VehicleLightState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for VehicleLightState {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for VehicleLightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}
