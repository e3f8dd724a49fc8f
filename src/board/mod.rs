//! Board geometry: the shared circular track and per-player paths.

pub mod track;

pub use track::Track;
