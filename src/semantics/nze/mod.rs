pub mod env;
pub mod normalize;
pub mod quote;
pub mod value;
pub use env::*;
pub use normalize::*;
pub use quote::*;
pub use value::*;
