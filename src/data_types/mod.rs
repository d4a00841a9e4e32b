pub mod configs;
pub mod geometry;
pub mod range;
pub mod record;

pub use configs::*;
pub use geometry::*;
pub use range::*;
pub use record::*;
