//! Simulates the DSP-engine side of storage binding: the engine owns the
//! float cells, the parameters write through them, and an engine-driven leaf
//! is refreshed between compute ticks.

use paramgraph_core::akp;
use paramgraph_core::core::cell::ParamCell;
use paramgraph_core::core::graph::{compute_tree, teardown_tree};
use paramgraph_core::core::parameter::Parameter;

fn main() {
    // The engine owns these cells; the core only writes through them.
    let engine_cutoff = ParamCell::new(0.0);
    let engine_output = ParamCell::new(0.0);

    let cutoff = Parameter::new();
    cutoff.bind(engine_cutoff.clone());

    let scaled = cutoff.scaled_by(akp(2.0));
    scaled.bind(engine_output.clone());

    for block in 0..4 {
        // Between processing phases the parameter is the sole writer.
        cutoff.set_value(1000.0 + 250.0 * block as f32);
        compute_tree(&scaled);

        println!(
            "block {}: cutoff cell = {:>6.1}, scaled cell = {:>6.1}",
            block,
            engine_cutoff.get(),
            engine_output.get()
        );
    }

    teardown_tree(&scaled);
    println!("after teardown: scaled cell stays at {}", engine_output.get());
}
