//! Compact event records for heavy-ion detector data.
//!
//! The full detector-event representation ([`MuDst`]) carried through
//! reconstruction is too heavy for analysis. This crate reduces it to a
//! flat, serialization-friendly [`PicoEvent`] in a single pass: fields
//! copy directly or with a narrowing cast, optional subsystems that are
//! absent leave their fields at sentinel defaults, and no step can fail.

pub mod convert_mu;
pub mod mu;
pub mod pico;
pub mod refmult;

pub use crate::mu::MuDst;
pub use crate::pico::PicoEvent;

/// Build a compact record from a full detector event
pub fn build(dst: &MuDst) -> PicoEvent {
    dst.into()
}
