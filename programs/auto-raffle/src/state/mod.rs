pub use raffle::*;
pub use vault::*;

pub mod raffle;
pub mod vault;
