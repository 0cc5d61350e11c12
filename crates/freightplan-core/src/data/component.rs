//! Component identifiers.
//!
//! A component is anything that can be placed on a freighter plan: rooms,
//! corridors, junctions, stairs. Display metadata lives in the designer's
//! component catalog; this enum is the identity shared by every crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a placeable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    RoomLarge = 1,
    RoomStorage = 2,
    RoomFleet = 3,
    CorridorStraight = 4,
    CorridorCurved = 5,
    Junction = 6,
    JunctionCross = 7,
    Stairs = 8,
}

impl ComponentId {
    /// Every component identifier, in code order.
    pub const ALL: [ComponentId; 8] = [
        ComponentId::RoomLarge,
        ComponentId::RoomStorage,
        ComponentId::RoomFleet,
        ComponentId::CorridorStraight,
        ComponentId::CorridorCurved,
        ComponentId::Junction,
        ComponentId::JunctionCross,
        ComponentId::Stairs,
    ];

    /// Numeric code of this component.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a component by numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.code() == code)
    }

    /// Identifier name, used as the icon resource key.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentId::RoomLarge => "RoomLarge",
            ComponentId::RoomStorage => "RoomStorage",
            ComponentId::RoomFleet => "RoomFleet",
            ComponentId::CorridorStraight => "CorridorStraight",
            ComponentId::CorridorCurved => "CorridorCurved",
            ComponentId::Junction => "Junction",
            ComponentId::JunctionCross => "JunctionCross",
            ComponentId::Stairs => "Stairs",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
