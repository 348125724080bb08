//! Builds a small arithmetic parameter graph, computes it, and prints the
//! dependency tree.

use paramgraph_core::akp;
use paramgraph_core::core::graph::compute_tree;
use paramgraph_core::core::parameter::Parameter;

fn main() {
    // (3 * 4) + (10 - 3), with the whole thing broadcast to stereo.
    let product = akp(3.0).scaled_by(akp(4.0));
    let difference = akp(10.0).minus(akp(3.0));
    let total = product.plus(difference.clone());
    let stereo = Parameter::stereo(total.clone(), total.clone());

    compute_tree(&stereo);

    println!("product    = {}", product.left_output());
    println!("difference = {}", difference.left_output());
    println!("total      = {}", total.left_output());
    println!(
        "stereo     = (L: {}, R: {})",
        stereo.left_output(),
        stereo.right_output()
    );

    println!("\nDependency graph:");
    print!("{}", stereo.visualize(2));
}
