use serde::{Deserialize, Serialize};

/// Sales regions covered by the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Jakarta,
    WestJava,
    CentralJava,
    EastJava,
    Bali,
    Sumatra,
}

impl Region {
    /// Get region code
    pub fn code(&self) -> &'static str {
        match self {
            Region::Jakarta => "jakarta",
            Region::WestJava => "west-java",
            Region::CentralJava => "central-java",
            Region::EastJava => "east-java",
            Region::Bali => "bali",
            Region::Sumatra => "sumatra",
        }
    }

    /// Get human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Jakarta => "Jakarta",
            Region::WestJava => "West Java",
            Region::CentralJava => "Central Java",
            Region::EastJava => "East Java",
            Region::Bali => "Bali",
            Region::Sumatra => "Sumatra",
        }
    }

    /// Demand uplift applied to order counts generated for this region
    pub fn uplift(&self) -> f64 {
        match self {
            Region::Jakarta => 1.15,
            Region::WestJava => 1.05,
            Region::CentralJava => 0.95,
            Region::EastJava => 1.00,
            Region::Bali => 0.90,
            Region::Sumatra => 0.92,
        }
    }

    /// Get all regions
    pub fn all() -> Vec<Region> {
        vec![
            Region::Jakarta,
            Region::WestJava,
            Region::CentralJava,
            Region::EastJava,
            Region::Bali,
            Region::Sumatra,
        ]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "jakarta" => Some(Region::Jakarta),
            "west-java" => Some(Region::WestJava),
            "central-java" => Some(Region::CentralJava),
            "east-java" => Some(Region::EastJava),
            "bali" => Some(Region::Bali),
            "sumatra" => Some(Region::Sumatra),
            _ => None,
        }
    }
}
