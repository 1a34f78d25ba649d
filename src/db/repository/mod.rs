//! Repository layer — entity-scoped database operations.
//!
//! Free functions over a borrowed `Connection`; each call is a
//! self-contained implicit transaction and every prepared statement is
//! scoped to the function body.

mod consultation;
mod patient;

pub use consultation::*;
pub use patient::*;
