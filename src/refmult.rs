use crate::mu::{MuDst, MuTrack, Side};

/// Charge sign of a track
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChargeSign {
    Negative,
    Positive,
}

// Track quality gate shared by all estimators
fn good_track(track: &MuTrack) -> bool {
    track.n_hits_fit > 15 && track.dca < 3.0
}

fn matches(track: &MuTrack, charge: ChargeSign, side: Side) -> bool {
    let sign_ok = match charge {
        ChargeSign::Negative => track.charge < 0,
        ChargeSign::Positive => track.charge > 0,
    };
    let side_ok = match side {
        Side::East => track.eta < 0.,
        Side::West => track.eta > 0.,
    };
    sign_ok && side_ok && good_track(track)
}

/// Reference multiplicity in 0.5 < |η| < 1.0 for one charge sign and side
pub fn ref_mult2(charge: ChargeSign, side: Side, dst: &MuDst) -> u32 {
    dst.primary_tracks
        .iter()
        .filter(|t| matches(t, charge, side) && t.eta.abs() > 0.5 && t.eta.abs() < 1.0)
        .count() as u32
}

/// Reference multiplicity in one |η| < 1.0 half for one charge sign
pub fn ref_mult_half(charge: ChargeSign, side: Side, dst: &MuDst) -> u32 {
    dst.primary_tracks
        .iter()
        .filter(|t| matches(t, charge, side) && t.eta.abs() < 1.0)
        .count() as u32
}
