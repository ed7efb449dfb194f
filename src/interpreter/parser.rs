/// Entry points, nesting limit and the parse result type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels and the
/// mapping from tokens to operators.
pub mod binary;

/// Primary expression parsing: literals and parenthesised groups.
pub mod primary;
