use serde::{Deserialize, Serialize};

/// Sales channels a transaction can arrive through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalesChannel {
    Organic,
    Ads,
    Affiliate,
    Referral,
}

impl SalesChannel {
    /// Get channel code
    pub fn code(&self) -> &'static str {
        match self {
            SalesChannel::Organic => "organic",
            SalesChannel::Ads => "ads",
            SalesChannel::Affiliate => "affiliate",
            SalesChannel::Referral => "referral",
        }
    }

    /// Get human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SalesChannel::Organic => "Organic",
            SalesChannel::Ads => "Ads",
            SalesChannel::Affiliate => "Affiliate",
            SalesChannel::Referral => "Referral",
        }
    }

    /// Demand uplift applied to order counts generated for this channel
    pub fn uplift(&self) -> f64 {
        match self {
            SalesChannel::Organic => 1.00,
            SalesChannel::Ads => 1.25,
            SalesChannel::Affiliate => 1.10,
            SalesChannel::Referral => 1.05,
        }
    }

    /// Get all channels
    pub fn all() -> Vec<SalesChannel> {
        vec![
            SalesChannel::Organic,
            SalesChannel::Ads,
            SalesChannel::Affiliate,
            SalesChannel::Referral,
        ]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "organic" => Some(SalesChannel::Organic),
            "ads" => Some(SalesChannel::Ads),
            "affiliate" => Some(SalesChannel::Affiliate),
            "referral" => Some(SalesChannel::Referral),
            _ => None,
        }
    }
}
