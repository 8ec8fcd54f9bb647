use crate::state::SpecialistId;

/// Capability table for carrier specialists.
pub trait SpecialistOracle: Send + Sync {
    fn carrier_specialist(&self, id: SpecialistId) -> Option<Specialist>;
}

/// Specialist definition as stored in the capability table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Specialist {
    pub id: SpecialistId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: SpecialistModifiers,
}

impl Specialist {
    /// Multiplier applied to the carrier's travel distance. Identity when absent.
    pub fn speed_modifier(&self) -> f64 {
        self.modifiers
            .local
            .as_ref()
            .and_then(|local| local.speed)
            .unwrap_or(1.0)
    }

    /// Whether other players are denied the ship count of carriers led by this specialist.
    pub fn hides_carrier_ships(&self) -> bool {
        self.modifiers
            .special
            .as_ref()
            .is_some_and(|special| special.hide_carrier_ships)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialistModifiers {
    #[cfg_attr(feature = "serde", serde(default))]
    pub local: Option<LocalModifiers>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special: Option<SpecialModifiers>,
}

/// Modifiers that act on the carrier itself.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalModifiers {
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: Option<f64>,
}

/// Rule-bending modifiers.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialModifiers {
    #[cfg_attr(feature = "serde", serde(default))]
    pub hide_carrier_ships: bool,
}
