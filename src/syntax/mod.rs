mod ast;
mod printer;
pub use self::ast::map;
pub use self::ast::visitor;
pub use self::ast::*;
