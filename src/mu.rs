/// Side of the detector along the beam axis
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    East,
    West,
}

/// SMD readout plane of the zero-degree calorimeter
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SmdPlane {
    Vertical,
    Horizontal,
}

/// Full detector-event aggregate, as delivered by the reconstruction chain
#[derive(Clone, Debug, Default)]
pub struct MuDst {
    /// Event-level summary
    pub event: MuEvent,
    /// Best-ranked reconstructed collision vertex, if any
    pub primary_vertex: Option<PrimaryVertex>,
    /// Barrel time-of-flight header, if the subsystem was read out
    pub btof_header: Option<BTofHeader>,
    /// Tracks fitted to the primary vertex
    pub primary_tracks: Vec<MuTrack>,
    /// Number of globally fitted tracks
    pub n_global_tracks: u32,
}

/// Event-level summary information
#[derive(Clone, Debug, Default)]
pub struct MuEvent {
    /// Run number
    pub run_id: i32,
    /// Event number within the run
    pub event_id: i32,
    /// Magnetic field in kG
    pub b_field: f32,
    /// Primary vertex position in cm
    pub primary_vertex_position: [f32; 3],
    /// Primary vertex position errors in cm
    pub primary_vertex_error: [f32; 3],
    /// Nominal trigger ids, in firing order, duplicates allowed
    pub trigger_ids: Vec<u32>,
    /// Reference multiplicity in the east FTPC
    pub ref_mult_ftpc_east: u32,
    /// Reference multiplicity in the west FTPC
    pub ref_mult_ftpc_west: u32,
    /// Negative-charge reference multiplicity
    pub ref_mult_neg: u32,
    /// Positive-charge reference multiplicity
    pub ref_mult_pos: u32,
    /// Global reference multiplicity
    pub grefmult: u32,
    /// Barrel time-of-flight tray multiplicity
    pub btof_tray_multiplicity: u32,
    /// Hits in the inner pixel layer
    pub n_pxl_inner_hits: u32,
    /// Hits in the outer pixel layer
    pub n_pxl_outer_hits: u32,
    /// Hits in the intermediate silicon tracker
    pub n_ist_hits: u32,
    /// Hits in the silicon strip detector
    pub n_ssd_hits: u32,
    /// Run-level rates and conditions
    pub run_info: RunInfo,
    /// Zero-degree calorimeter readings
    pub zdc: ZdcTriggerDetector,
    /// Vertex-position detector readings
    pub vpd: VpdTriggerDetector,
    /// Beam-beam counter readings
    pub bbc: BbcTriggerDetector,
}

/// Best-ranked reconstructed collision vertex
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PrimaryVertex {
    /// Reconstruction-quality score
    pub ranking: f32,
    /// Tracks matched to the barrel calorimeter
    pub n_bemc_match: u16,
    /// Tracks matched to the barrel time-of-flight
    pub n_btof_match: u16,
}

/// Barrel time-of-flight header
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BTofHeader {
    /// VPD hits on the east side
    pub n_vpd_hits_east: u32,
    /// VPD hits on the west side
    pub n_vpd_hits_west: u32,
    /// Number of start-time measurements
    pub n_tzero: u32,
    /// Vertex z from VPD timing, in cm
    pub vpd_vz: f64,
}

/// A track fitted to the primary vertex
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MuTrack {
    /// Charge sign, ±1
    pub charge: i8,
    /// Pseudorapidity
    pub eta: f64,
    /// Distance of closest approach to the vertex, in cm
    pub dca: f64,
    /// TPC hits used in the track fit
    pub n_hits_fit: u16,
}

/// Run-level rates and conditions
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RunInfo {
    /// Collider fill number of the blue beam
    pub beam_fill_number: u32,
    /// ZDC east-west coincidence rate in Hz
    pub zdc_coincidence_rate: f64,
    /// BBC east-west coincidence rate in Hz
    pub bbc_coincidence_rate: f64,
    /// Overall beam-background rate
    pub background_rate: f32,
    /// Blue-beam background rate seen by the BBC
    pub bbc_blue_background_rate: f32,
    /// Yellow-beam background rate seen by the BBC
    pub bbc_yellow_background_rate: f32,
    pub bbc_east_rate: f32,
    pub bbc_west_rate: f32,
    pub zdc_east_rate: f32,
    pub zdc_west_rate: f32,
    /// Space-charge correction estimate
    pub space_charge: f32,
}

/// Zero-degree calorimeter trigger readings
///
/// The shower-maximum detector (SMD) behind each calorimeter has 8
/// scintillator strips per readout plane, addressed 1 through 8.
#[derive(Clone, Debug, Default)]
pub struct ZdcTriggerDetector {
    /// ADC sum per side, indexed [east, west]
    pub adc_sum: [f32; 2],
    /// SMD strip readings, indexed [side][plane][strip]
    pub smd: [[[f32; 8]; 2]; 2],
}

impl ZdcTriggerDetector {
    pub fn adc_sum(&self, side: Side) -> f32 {
        self.adc_sum[side as usize]
    }

    /// SMD strip reading, `strip` addressed 1 through 8
    pub fn smd(&self, side: Side, plane: SmdPlane, strip: usize) -> f32 {
        self.smd[side as usize][plane as usize][strip - 1]
    }
}

/// Vertex-position detector trigger readings
///
/// Each side has 16 photomultiplier channels, addressed 1 through 16
/// by the trigger electronics.
#[derive(Clone, Debug, Default)]
pub struct VpdTriggerDetector {
    /// Pulse amplitudes, indexed [side][channel]
    pub adc: [[f32; 16]; 2],
    /// Pulse times, indexed [side][channel]
    pub tdc: [[f32; 16]; 2],
}

impl VpdTriggerDetector {
    /// Pulse amplitude, `channel` addressed 1 through 16
    pub fn adc(&self, side: Side, channel: usize) -> f32 {
        self.adc[side as usize][channel - 1]
    }

    /// Pulse time, `channel` addressed 1 through 16
    pub fn tdc(&self, side: Side, channel: usize) -> f32 {
        self.tdc[side as usize][channel - 1]
    }
}

/// Beam-beam counter trigger readings
#[derive(Clone, Debug, Default)]
pub struct BbcTriggerDetector {
    /// ADC value per photomultiplier, east channels 0-23 then west 24-47
    pub adc: Vec<u16>,
}

impl BbcTriggerDetector {
    pub fn number_of_pmts(&self) -> usize {
        self.adc.len()
    }

    pub fn adc(&self, pmt: usize) -> u16 {
        self.adc[pmt]
    }
}
