/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing or parsing source
/// text into expression trees.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a tree, such
/// as division by zero or integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
