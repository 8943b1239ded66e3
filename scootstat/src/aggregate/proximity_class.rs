use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// relation of a trip's endpoints to the walkable areas around transit stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProximityClass {
    #[serde(rename = "Both endpoints in transit zones")]
    Both,
    #[serde(rename = "Origin only in transit zone")]
    OriginOnly,
    #[serde(rename = "Destination only in transit zone")]
    DestinationOnly,
    #[serde(rename = "No endpoint in transit zone")]
    Neither,
}

impl ProximityClass {
    pub const ALL: [ProximityClass; 4] = [
        ProximityClass::Both,
        ProximityClass::OriginOnly,
        ProximityClass::DestinationOnly,
        ProximityClass::Neither,
    ];

    pub fn of(origin_near: bool, destination_near: bool) -> ProximityClass {
        match (origin_near, destination_near) {
            (true, true) => ProximityClass::Both,
            (true, false) => ProximityClass::OriginOnly,
            (false, true) => ProximityClass::DestinationOnly,
            (false, false) => ProximityClass::Neither,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProximityClass::Both => "Both endpoints in transit zones",
            ProximityClass::OriginOnly => "Origin only in transit zone",
            ProximityClass::DestinationOnly => "Destination only in transit zone",
            ProximityClass::Neither => "No endpoint in transit zone",
        }
    }

    pub fn origin_near(&self) -> bool {
        matches!(self, ProximityClass::Both | ProximityClass::OriginOnly)
    }

    pub fn destination_near(&self) -> bool {
        matches!(self, ProximityClass::Both | ProximityClass::DestinationOnly)
    }
}

impl Display for ProximityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
