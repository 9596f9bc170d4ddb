use itertools::Itertools;

use crate::mu::{MuDst, Side, SmdPlane};
use crate::pico::PicoEvent;
use crate::refmult::{ref_mult2, ref_mult_half, ChargeSign::*};

impl From<&MuDst> for PicoEvent {
    fn from(source: &MuDst) -> Self {
        let ev = &source.event;
        let run_info = &ev.run_info;
        let mut pico = PicoEvent {
            run_id: ev.run_id,
            event_id: ev.event_id,
            fill_id: run_info.beam_fill_number,
            b_field: ev.b_field,
            primary_vertex: ev.primary_vertex_position,
            primary_vertex_error: ev.primary_vertex_error,
            trigger_ids: ev.trigger_ids.clone(),
            ref_mult_ftpc_east: ev.ref_mult_ftpc_east as u16,
            ref_mult_ftpc_west: ev.ref_mult_ftpc_west as u16,
            ref_mult_neg: ev.ref_mult_neg as u16,
            ref_mult_pos: ev.ref_mult_pos as u16,
            ref_mult2_neg_east: ref_mult2(Negative, Side::East, source) as u16,
            ref_mult2_pos_east: ref_mult2(Positive, Side::East, source) as u16,
            ref_mult2_neg_west: ref_mult2(Negative, Side::West, source) as u16,
            ref_mult2_pos_west: ref_mult2(Positive, Side::West, source) as u16,
            ref_mult_half_neg_east: ref_mult_half(Negative, Side::East, source) as u16,
            ref_mult_half_pos_east: ref_mult_half(Positive, Side::East, source) as u16,
            ref_mult_half_neg_west: ref_mult_half(Negative, Side::West, source) as u16,
            ref_mult_half_pos_west: ref_mult_half(Positive, Side::West, source) as u16,
            grefmult: ev.grefmult as u16,
            n_global_tracks: source.n_global_tracks as u16,
            btof_tray_multiplicity: ev.btof_tray_multiplicity as u16,
            n_hits_hft: [
                ev.n_pxl_inner_hits as u16,
                ev.n_pxl_outer_hits as u16,
                ev.n_ist_hits as u16,
                ev.n_ssd_hits as u16,
            ],
            zdcx: run_info.zdc_coincidence_rate as u32,
            bbcx: run_info.bbc_coincidence_rate as u32,
            background_rate: run_info.background_rate,
            bbc_blue_background_rate: run_info.bbc_blue_background_rate,
            bbc_yellow_background_rate: run_info.bbc_yellow_background_rate,
            bbc_east_rate: run_info.bbc_east_rate,
            bbc_west_rate: run_info.bbc_west_rate,
            zdc_east_rate: run_info.zdc_east_rate,
            zdc_west_rate: run_info.zdc_west_rate,
            space_charge: run_info.space_charge,
            ..Default::default()
        };

        // the vertex finder reports equal coordinates when no vertex
        // was reconstructed
        if pico.primary_vertex.iter().all_equal() {
            pico.primary_vertex = [-999.; 3];
            pico.primary_vertex_error = [0.; 3];
        }

        if let Some(pv) = &source.primary_vertex {
            pico.ranking = pv.ranking;
            pico.n_bemc_match = pv.n_bemc_match;
            pico.n_btof_match = pv.n_btof_match;
        }

        if let Some(header) = &source.btof_header {
            pico.n_vpd_hits_east = header.n_vpd_hits_east as u8;
            pico.n_vpd_hits_west = header.n_vpd_hits_west as u8;
            pico.n_tzero = header.n_tzero as u16;
            let scaled = (header.vpd_vz * 100.).round();
            pico.vz_vpd = if scaled.abs() > f64::from(i16::MAX) {
                i16::MAX
            } else {
                scaled as i16
            };
        }

        let zdc = &ev.zdc;
        pico.zdc_sum_adc_east = zdc.adc_sum(Side::East) as u16;
        pico.zdc_sum_adc_west = zdc.adc_sum(Side::West) as u16;
        for strip in 1..=8 {
            let adc = zdc.smd(Side::East, SmdPlane::Horizontal, strip);
            if adc != 0. {
                pico.zdc_smd_east_horizontal[strip - 1] = adc as u16;
            }
            let adc = zdc.smd(Side::East, SmdPlane::Vertical, strip);
            if adc != 0. {
                pico.zdc_smd_east_vertical[strip - 1] = adc as u16;
            }
            let adc = zdc.smd(Side::West, SmdPlane::Horizontal, strip);
            if adc != 0. {
                pico.zdc_smd_west_horizontal[strip - 1] = adc as u16;
            }
            let adc = zdc.smd(Side::West, SmdPlane::Vertical, strip);
            if adc != 0. {
                pico.zdc_smd_west_vertical[strip - 1] = adc as u16;
            }
        }

        // The slot order encodes the physical channel-to-electronics
        // mapping of the VPD readout. Channels are addressed 1-16 per
        // side, in descending order within each half.
        let vpd = &ev.vpd;
        for i in 0..16 {
            if i < 8 {
                let ch = 8 - i;
                pico.vpd[i] = vpd.adc(Side::East, ch) as u16;
                pico.vpd[i + 8] = vpd.tdc(Side::East, ch) as u16;
                pico.vpd[i + 32] = vpd.adc(Side::West, ch) as u16;
                pico.vpd[i + 40] = vpd.tdc(Side::West, ch) as u16;
            } else {
                let ch = 32 - (i + 8);
                pico.vpd[i + 8] = vpd.adc(Side::East, ch) as u16;
                pico.vpd[i + 16] = vpd.tdc(Side::East, ch) as u16;
                pico.vpd[i + 40] = vpd.adc(Side::West, ch) as u16;
                pico.vpd[i + 48] = vpd.tdc(Side::West, ch) as u16;
            }
        }

        for pmt in 0..ev.bbc.number_of_pmts() {
            // east channels 0-23, west channels 24-47
            let slot = pmt % 24;
            if pmt < 24 {
                pico.bbc_adc_east[slot] = ev.bbc.adc(pmt);
            } else {
                pico.bbc_adc_west[slot] = ev.bbc.adc(pmt);
            }
        }

        pico
    }
}
