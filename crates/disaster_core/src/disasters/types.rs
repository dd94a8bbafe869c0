use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Disaster Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisasterType {
    Earthquake,
    Fire,
    PowerGridFailure,
    GasLeak,
    IndustrialAccident,
}

impl DisasterType {
    pub const ALL: [DisasterType; 5] = [
        DisasterType::Earthquake,
        DisasterType::Fire,
        DisasterType::PowerGridFailure,
        DisasterType::GasLeak,
        DisasterType::IndustrialAccident,
    ];

    /// Human-readable label for UI display.
    pub fn name(self) -> &'static str {
        match self {
            DisasterType::Earthquake => "Earthquake",
            DisasterType::Fire => "Fire",
            DisasterType::PowerGridFailure => "Power Grid Failure",
            DisasterType::GasLeak => "Gas Leak",
            DisasterType::IndustrialAccident => "Industrial Accident",
        }
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a scripted trigger names a disaster type this core does not model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDisasterType(pub String);

impl fmt::Display for UnknownDisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown disaster type: '{}'", self.0)
    }
}

impl std::error::Error for UnknownDisasterType {}

impl FromStr for DisasterType {
    type Err = UnknownDisasterType;

    /// Accepts the variant name in any case, with or without spaces,
    /// underscores or hyphens ("gas_leak", "Gas Leak", "GasLeak").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "earthquake" => Ok(DisasterType::Earthquake),
            "fire" => Ok(DisasterType::Fire),
            "powergridfailure" => Ok(DisasterType::PowerGridFailure),
            "gasleak" => Ok(DisasterType::GasLeak),
            "industrialaccident" => Ok(DisasterType::IndustrialAccident),
            _ => Err(UnknownDisasterType(s.to_string())),
        }
    }
}

// =============================================================================
// Identity
// =============================================================================

/// Registry-assigned identifier. Monotonic per manager, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DisasterId(pub u64);

impl fmt::Display for DisasterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Telemetry
// =============================================================================

/// Read-only snapshot of one disaster for HUD/status display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterStatus {
    pub id: DisasterId,
    pub disaster_type: DisasterType,
    pub name: String,
    pub epicenter: (i32, i32),
    pub radius: f32,
    pub intensity: f32,
    pub current_tick: u32,
    pub duration: u32,
    pub active: bool,
    pub parent: Option<DisasterId>,
}

// =============================================================================
// Cascades
// =============================================================================

/// A request raised by an event during its tick to start a new disaster.
/// The manager drains these after the registry pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub disaster_type: DisasterType,
    pub intensity: f32,
    pub duration: u32,
    pub x: i32,
    pub y: i32,
    pub radius: f32,
    pub parent: DisasterId,
}
