#![forbid(unsafe_code)]

pub mod fact;
pub mod model;

pub use fact::{FactOutcome, FactPhase, FactRequest, FactSession, FactTicket};
