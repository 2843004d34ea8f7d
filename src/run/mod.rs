pub mod assignment;
pub mod encoder;
pub mod row;
pub mod structured;

pub use assignment::*;
pub use encoder::*;
pub use row::*;
pub use structured::*;
