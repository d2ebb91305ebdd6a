//! Use-Cases: fachliche Abläufe auf dem AppState.

pub mod frame;
