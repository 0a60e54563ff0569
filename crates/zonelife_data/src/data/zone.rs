use serde::{Deserialize, Serialize};

/// Quadrant of the grid. Each quadrant runs its own survive/birth rule.
///
/// The discriminant is the zone id exposed to front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Zone {
    /// Low-x, low-y quadrant. Alive cells carry a damage counter.
    #[default]
    Damage = 0,
    /// High-x, low-y quadrant. Plain B3/S23.
    StandardEast = 1,
    /// Low-x, high-y quadrant. Plain B3/S23.
    StandardWest = 2,
    /// High-x, high-y quadrant.
    Sensory = 3,
}

impl Zone {
    pub const ALL: [Zone; 4] = [
        Zone::Damage,
        Zone::StandardEast,
        Zone::StandardWest,
        Zone::Sensory,
    ];

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_damage(self) -> bool {
        self == Zone::Damage
    }

    #[inline]
    pub fn is_standard(self) -> bool {
        matches!(self, Zone::StandardEast | Zone::StandardWest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_ids_match_discriminants() {
        for (i, zone) in Zone::ALL.iter().enumerate() {
            assert_eq!(zone.id() as usize, i);
        }
    }

    #[test]
    fn test_standard_zones() {
        assert!(Zone::StandardEast.is_standard());
        assert!(Zone::StandardWest.is_standard());
        assert!(!Zone::Damage.is_standard());
        assert!(!Zone::Sensory.is_standard());
    }
}
