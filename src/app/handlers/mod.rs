//! Feature-Handler für OverlayCommand-Verarbeitung.
//!
//! Der Controller dispatcht an die passende Handler-Funktion; die
//! Ansicht-Schaltung bleibt im Controller selbst.

pub mod curve;
pub mod settings;
