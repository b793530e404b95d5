//! UI Modules
//!
//! Each focusable panel implements the Module trait and turns the keys the
//! global bindings leave over into actions for the store.
//!
//! Modules:
//! - transactions: row selection, expand and copy on the transaction table
//! - advice: tab switching and the start-analysis call to action

pub mod advice;
pub mod transactions;

pub use advice::AdvicePanel;
pub use transactions::TxPanel;
