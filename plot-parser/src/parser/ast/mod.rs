pub mod binary;
pub mod call;
pub mod expr;
pub mod formula;
pub mod iter;
pub mod literal;
pub mod paren;
pub mod unary;
