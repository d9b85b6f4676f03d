pub mod user;
pub mod stats;

pub use user::*;
pub use stats::*;
