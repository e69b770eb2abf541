use serde::{Deserialize, Serialize};

/// Product tiers with strictly increasing price bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductTier {
    Basic,
    Standard,
    Premium,
}

impl ProductTier {
    /// Get tier code
    pub fn code(&self) -> &'static str {
        match self {
            ProductTier::Basic => "basic",
            ProductTier::Standard => "standard",
            ProductTier::Premium => "premium",
        }
    }

    /// Get human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductTier::Basic => "Basic",
            ProductTier::Standard => "Standard",
            ProductTier::Premium => "Premium",
        }
    }

    /// Relative draw weight of this tier (per cent, sums to 100 across tiers)
    pub fn weight(&self) -> u32 {
        match self {
            ProductTier::Basic => 55,
            ProductTier::Standard => 32,
            ProductTier::Premium => 13,
        }
    }

    /// Inclusive unit-price band in rupiah
    pub fn price_band(&self) -> (u64, u64) {
        match self {
            ProductTier::Basic => (30_000, 70_000),
            ProductTier::Standard => (70_000, 150_000),
            ProductTier::Premium => (150_000, 350_000),
        }
    }

    /// Get all tiers, in draw order
    pub fn all() -> Vec<ProductTier> {
        vec![
            ProductTier::Basic,
            ProductTier::Standard,
            ProductTier::Premium,
        ]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "basic" => Some(ProductTier::Basic),
            "standard" => Some(ProductTier::Standard),
            "premium" => Some(ProductTier::Premium),
            _ => None,
        }
    }
}
