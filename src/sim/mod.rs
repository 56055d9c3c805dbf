/// Game simulation: session state machine, word pools, gesture tracking.

pub mod event;
pub mod gesture;
pub mod session;
pub mod words;
