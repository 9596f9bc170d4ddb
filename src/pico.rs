/// Compact event record
///
/// A flat aggregate of narrow fixed-width fields, suitable for direct
/// serialization. Built in one pass from a [`MuDst`](crate::mu::MuDst);
/// fields whose source sub-object is absent keep their defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct PicoEvent {
    /// Run number
    pub run_id: i32,
    /// Event number within the run
    pub event_id: i32,
    /// Collider fill number
    pub fill_id: u32,
    /// Magnetic field in kG
    pub b_field: f32,
    /// Primary vertex position in cm, `[-999., -999., -999.]` if none
    pub primary_vertex: [f32; 3],
    /// Primary vertex position errors in cm
    pub primary_vertex_error: [f32; 3],
    /// Vertex reconstruction-quality score, -999 if no vertex
    pub ranking: f32,
    /// Tracks matched to the barrel calorimeter
    pub n_bemc_match: u16,
    /// Tracks matched to the barrel time-of-flight
    pub n_btof_match: u16,
    /// Nominal trigger ids, in firing order
    pub trigger_ids: Vec<u32>,
    pub ref_mult_ftpc_east: u16,
    pub ref_mult_ftpc_west: u16,
    pub ref_mult_neg: u16,
    pub ref_mult_pos: u16,
    pub ref_mult2_neg_east: u16,
    pub ref_mult2_pos_east: u16,
    pub ref_mult2_neg_west: u16,
    pub ref_mult2_pos_west: u16,
    pub ref_mult_half_neg_east: u16,
    pub ref_mult_half_pos_east: u16,
    pub ref_mult_half_neg_west: u16,
    pub ref_mult_half_pos_west: u16,
    /// Global reference multiplicity
    pub grefmult: u16,
    pub n_global_tracks: u16,
    pub btof_tray_multiplicity: u16,
    /// HFT hit counts: pixel inner, pixel outer, IST, SSD
    pub n_hits_hft: [u16; 4],
    pub n_vpd_hits_east: u8,
    pub n_vpd_hits_west: u8,
    /// Number of start-time measurements
    pub n_tzero: u16,
    /// Vertex z from VPD timing, in hundredths of cm; `i16::MAX` if unavailable
    pub vz_vpd: i16,
    /// ZDC coincidence rate in Hz
    pub zdcx: u32,
    /// BBC coincidence rate in Hz
    pub bbcx: u32,
    pub background_rate: f32,
    pub bbc_blue_background_rate: f32,
    pub bbc_yellow_background_rate: f32,
    pub bbc_east_rate: f32,
    pub bbc_west_rate: f32,
    pub zdc_east_rate: f32,
    pub zdc_west_rate: f32,
    /// VPD amplitudes and times, remapped to electronics order
    pub vpd: [u16; 64],
    pub zdc_sum_adc_east: u16,
    pub zdc_sum_adc_west: u16,
    pub zdc_smd_east_horizontal: [u16; 8],
    pub zdc_smd_east_vertical: [u16; 8],
    pub zdc_smd_west_horizontal: [u16; 8],
    pub zdc_smd_west_vertical: [u16; 8],
    pub bbc_adc_east: [u16; 24],
    pub bbc_adc_west: [u16; 24],
    /// Space-charge correction estimate
    pub space_charge: f32,
    /// High-tower trigger thresholds per patch
    pub ht_threshold: [u8; 4],
    /// Jet-patch trigger thresholds per patch
    pub jp_threshold: [u8; 4],
}

impl Default for PicoEvent {
    fn default() -> Self {
        Self {
            run_id: 0,
            event_id: 0,
            fill_id: 0,
            b_field: 0.,
            primary_vertex: [-999.; 3],
            primary_vertex_error: [-999.; 3],
            ranking: -999.,
            n_bemc_match: 0,
            n_btof_match: 0,
            trigger_ids: Vec::new(),
            ref_mult_ftpc_east: 0,
            ref_mult_ftpc_west: 0,
            ref_mult_neg: 0,
            ref_mult_pos: 0,
            ref_mult2_neg_east: 0,
            ref_mult2_pos_east: 0,
            ref_mult2_neg_west: 0,
            ref_mult2_pos_west: 0,
            ref_mult_half_neg_east: 0,
            ref_mult_half_pos_east: 0,
            ref_mult_half_neg_west: 0,
            ref_mult_half_pos_west: 0,
            grefmult: 0,
            n_global_tracks: 0,
            btof_tray_multiplicity: 0,
            n_hits_hft: [0; 4],
            n_vpd_hits_east: 0,
            n_vpd_hits_west: 0,
            n_tzero: 0,
            vz_vpd: i16::MAX,
            zdcx: 0,
            bbcx: 0,
            background_rate: 0.,
            bbc_blue_background_rate: 0.,
            bbc_yellow_background_rate: 0.,
            bbc_east_rate: 0.,
            bbc_west_rate: 0.,
            zdc_east_rate: 0.,
            zdc_west_rate: 0.,
            vpd: [0; 64],
            zdc_sum_adc_east: 0,
            zdc_sum_adc_west: 0,
            zdc_smd_east_horizontal: [0; 8],
            zdc_smd_east_vertical: [0; 8],
            zdc_smd_west_horizontal: [0; 8],
            zdc_smd_west_vertical: [0; 8],
            bbc_adc_east: [0; 24],
            bbc_adc_west: [0; 24],
            space_charge: 0.,
            ht_threshold: [0; 4],
            jp_threshold: [0; 4],
        }
    }
}

impl PicoEvent {
    /// Data-taking year, decoded from the run number
    ///
    /// The leading digits of the run number encode the year since 2000,
    /// offset by one.
    pub fn year(&self) -> i32 {
        self.run_id / 1_000_000 - 1 + 2000
    }

    /// Day of year, decoded from the run number
    pub fn day(&self) -> i32 {
        (self.run_id % 1_000_000) / 1000
    }

    /// Whether the given trigger id fired in this event
    pub fn is_trigger(&self, id: u32) -> bool {
        self.trigger_ids.contains(&id)
    }

    /// Set the high-tower trigger threshold for patch `i`
    pub fn set_ht_threshold(&mut self, i: usize, threshold: u8) {
        self.ht_threshold[i] = threshold;
    }

    /// Set the jet-patch trigger threshold for patch `i`
    pub fn set_jp_threshold(&mut self, i: usize, threshold: u8) {
        self.jp_threshold[i] = threshold;
    }
}
