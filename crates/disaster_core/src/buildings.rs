use serde::{Deserialize, Serialize};

/// Starting condition of a freshly constructed building.
pub const MAX_CONDITION: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UtilityKind {
    Electricity,
    Water,
    Gas,
    Sewage,
}

impl UtilityKind {
    pub const ALL: [UtilityKind; 4] = [
        UtilityKind::Electricity,
        UtilityKind::Water,
        UtilityKind::Gas,
        UtilityKind::Sewage,
    ];
}

/// Per-building utility hookups. Each flag is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityConnections {
    pub electricity: bool,
    pub water: bool,
    pub gas: bool,
    pub sewage: bool,
}

impl Default for UtilityConnections {
    fn default() -> Self {
        Self::all_connected()
    }
}

impl UtilityConnections {
    pub fn all_connected() -> Self {
        Self {
            electricity: true,
            water: true,
            gas: true,
            sewage: true,
        }
    }

    pub fn is_connected(&self, kind: UtilityKind) -> bool {
        match kind {
            UtilityKind::Electricity => self.electricity,
            UtilityKind::Water => self.water,
            UtilityKind::Gas => self.gas,
            UtilityKind::Sewage => self.sewage,
        }
    }

    pub fn disconnect(&mut self, kind: UtilityKind) {
        match kind {
            UtilityKind::Electricity => self.electricity = false,
            UtilityKind::Water => self.water = false,
            UtilityKind::Gas => self.gas = false,
            UtilityKind::Sewage => self.sewage = false,
        }
    }

    pub fn connected_count(&self) -> usize {
        UtilityKind::ALL
            .iter()
            .filter(|&&k| self.is_connected(k))
            .count()
    }
}

/// A resident of a building. Values nominally live in 0.0-100.0, but nothing
/// here clamps them; the citizen layer owns normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Occupant {
    pub health: f32,
    pub happiness: f32,
}

impl Default for Occupant {
    fn default() -> Self {
        Self {
            health: 100.0,
            happiness: 100.0,
        }
    }
}

impl Occupant {
    pub fn new(health: f32, happiness: f32) -> Self {
        Self { health, happiness }
    }

    pub fn harm(&mut self, health_loss: f32, happiness_loss: f32) {
        self.health -= health_loss;
        self.happiness -= happiness_loss;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CommercialZoning {
    #[default]
    Retail,
    Office,
    Factory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BuildingKind {
    Residential { occupants: Vec<Occupant> },
    Commercial { zoning: CommercialZoning },
    /// Service and civic buildings: no occupants, no zoning.
    Civic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub condition: f32,
    pub utilities: UtilityConnections,
    pub kind: BuildingKind,
}

impl Building {
    pub fn new(kind: BuildingKind) -> Self {
        Self {
            condition: MAX_CONDITION,
            utilities: UtilityConnections::all_connected(),
            kind,
        }
    }

    pub fn residential(occupants: Vec<Occupant>) -> Self {
        Self::new(BuildingKind::Residential { occupants })
    }

    pub fn commercial(zoning: CommercialZoning) -> Self {
        Self::new(BuildingKind::Commercial { zoning })
    }

    pub fn civic() -> Self {
        Self::new(BuildingKind::Civic)
    }

    /// Reduce condition by `amount`, never going below zero.
    pub fn apply_damage(&mut self, amount: f32) {
        self.condition = (self.condition - amount).max(0.0);
    }

    pub fn is_factory(&self) -> bool {
        matches!(
            self.kind,
            BuildingKind::Commercial {
                zoning: CommercialZoning::Factory
            }
        )
    }

    /// Current occupants; empty for non-residential buildings.
    pub fn occupants(&self) -> &[Occupant] {
        match &self.kind {
            BuildingKind::Residential { occupants } => occupants,
            _ => &[],
        }
    }

    /// Apply the same loss to every occupant. No-op for non-residential buildings.
    pub fn harm_occupants(&mut self, health_loss: f32, happiness_loss: f32) {
        if let BuildingKind::Residential { occupants } = &mut self.kind {
            for occupant in occupants.iter_mut() {
                occupant.harm(health_loss, happiness_loss);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_floors_at_zero() {
        let mut b = Building::civic();
        b.apply_damage(30.0);
        assert!((b.condition - 70.0).abs() < f32::EPSILON);
        b.apply_damage(500.0);
        assert_eq!(b.condition, 0.0);
    }

    #[test]
    fn test_disconnect_single_utility() {
        let mut u = UtilityConnections::all_connected();
        u.disconnect(UtilityKind::Gas);
        assert!(!u.gas);
        assert!(u.electricity && u.water && u.sewage);
        assert_eq!(u.connected_count(), 3);
    }

    #[test]
    fn test_factory_detection() {
        assert!(Building::commercial(CommercialZoning::Factory).is_factory());
        assert!(!Building::commercial(CommercialZoning::Retail).is_factory());
        assert!(!Building::residential(vec![]).is_factory());
    }

    #[test]
    fn test_harm_occupants_not_clamped() {
        let mut b = Building::residential(vec![Occupant::new(5.0, 2.0)]);
        b.harm_occupants(10.0, 10.0);
        let o = b.occupants()[0];
        assert!((o.health + 5.0).abs() < f32::EPSILON, "got {}", o.health);
        assert!((o.happiness + 8.0).abs() < f32::EPSILON, "got {}", o.happiness);
    }

    #[test]
    fn test_harm_occupants_ignores_non_residential() {
        let mut b = Building::commercial(CommercialZoning::Office);
        b.harm_occupants(10.0, 10.0);
        assert!(b.occupants().is_empty());
    }
}
