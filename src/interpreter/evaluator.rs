/// Core evaluation logic and context management.
///
/// Contains the evaluation settings, the overflow policy and the stack-safe
/// evaluator used by the driver.
pub mod core;

/// The evaluable-node capability.
///
/// Declares the [`Node`](node::Node) trait and implements it for literals,
/// binary nodes and whole expression trees.
pub mod node;

/// Binary operator evaluation logic.
///
/// Defines what each operator does with its two evaluated operands, including
/// division by zero and overflow handling.
pub mod binary;
