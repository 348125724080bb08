//! Renders a short chromatic sweep to a WAV file. The oscillator frequency
//! comes from a parameter graph: a base frequency scaled by a MIDI ratio
//! that steps one semitone every quarter second.

use anyhow::Result;
use paramgraph_core::akp;
use paramgraph_core::core::convert::midi_ratio;
use paramgraph_core::core::graph::compute_tree;
use paramgraph_core::core::parameter::Parameter;

const SAMPLE_RATE: u32 = 44100;
const SEMITONES: u32 = 12;
const STEP_SAMPLES: u32 = SAMPLE_RATE / 4;

fn main() -> Result<()> {
    let ratio = Parameter::new();
    ratio.set_value(1.0);
    let frequency = akp(220.0).scaled_by(ratio.clone());

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create("midi_sweep.wav", spec)?;

    let mut phase = 0.0f32;
    for semitone in 0..=SEMITONES {
        ratio.set_value(midi_ratio(semitone as f32));
        compute_tree(&frequency);
        let step = frequency.left_output() / SAMPLE_RATE as f32;

        for _ in 0..STEP_SAMPLES {
            let sample = (phase * std::f32::consts::TAU).sin() * 0.5;
            writer.write_sample((sample * i16::MAX as f32) as i16)?;
            phase = (phase + step).fract();
        }
    }

    writer.finalize()?;
    println!("wrote midi_sweep.wav ({} semitone steps)", SEMITONES + 1);
    Ok(())
}
