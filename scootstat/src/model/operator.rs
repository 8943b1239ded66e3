use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the e-scooter sharing providers whose trip exports are analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Lime,
    Void,
    Bird,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Lime, Operator::Void, Operator::Bird];

    pub fn tag(&self) -> &'static str {
        match self {
            Operator::Lime => "LIME",
            Operator::Void => "VOID",
            Operator::Bird => "BIRD",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_uppercase();
        Operator::ALL
            .into_iter()
            .find(|op| op.tag() == tag)
            .ok_or_else(|| {
                let valid = Operator::ALL.map(|op| op.tag()).join(", ");
                format!("unknown operator '{s}', expected one of [{valid}]")
            })
    }
}
