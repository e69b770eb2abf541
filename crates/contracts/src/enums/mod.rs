pub mod product_tier;
pub mod region;
pub mod sales_channel;

pub use product_tier::ProductTier;
pub use region::Region;
pub use sales_channel::SalesChannel;
