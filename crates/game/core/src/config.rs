/// Per-game rule switches chosen at game creation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSettings {
    /// Whether players may convert in-transit carriers into gifts.
    pub gift_carriers: FeatureToggle,
}

impl GameSettings {
    pub fn with_gift_carriers(gift_carriers: FeatureToggle) -> Self {
        Self { gift_carriers }
    }

    #[inline]
    pub fn gifting_enabled(&self) -> bool {
        self.gift_carriers.is_enabled()
    }
}

/// Two-state game setting.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FeatureToggle {
    #[default]
    Enabled,
    Disabled,
}

impl FeatureToggle {
    #[inline]
    pub const fn is_enabled(self) -> bool {
        matches!(self, FeatureToggle::Enabled)
    }
}

/// Balance constants shared by every game.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConstants {
    pub distances: DistanceConstants,
}

/// Distance and speed constants, in galaxy units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceConstants {
    /// Distance a carrier covers per tick at base speed.
    pub ship_speed: f64,
    /// Multiplier applied to `ship_speed` when travelling at warp.
    pub warp_speed_multiplier: f64,
    /// Length of one light year; scanning ranges are expressed in it.
    pub light_year: f64,
}

impl DistanceConstants {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LIGHT_YEAR: f64 = 50.0;
    pub const DEFAULT_SHIP_SPEED: f64 = Self::DEFAULT_LIGHT_YEAR / 10.0;
    pub const DEFAULT_WARP_SPEED_MULTIPLIER: f64 = 3.0;

    pub fn new(ship_speed: f64, warp_speed_multiplier: f64, light_year: f64) -> Self {
        Self {
            ship_speed,
            warp_speed_multiplier,
            light_year,
        }
    }
}

impl Default for DistanceConstants {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SHIP_SPEED,
            Self::DEFAULT_WARP_SPEED_MULTIPLIER,
            Self::DEFAULT_LIGHT_YEAR,
        )
    }
}
