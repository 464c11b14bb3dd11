pub mod nze;
pub use self::nze::*;
