pub mod normalize;
pub mod odds;
pub mod score_aggregators;

pub use normalize::*;
pub use odds::*;
pub use score_aggregators::*;
