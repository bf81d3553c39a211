//! # A single tanh neuron, by hand
//!
//! Builds `o = tanh(x1*w1 + x2*w2 + b)` from labelled leaves, runs one backward
//! pass, prints every gradient and then the graph in Graphviz dot syntax.
//!
//! ## Running
//! `cargo run --example tanh_neuron > neuron.dot && dot -Tsvg neuron.dot -o neuron.svg`

use scalargrad_core::viz::write_dot;
use scalargrad_core::Value;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.881_373_587_019_543, "b");

    let x1w1 = &x1 * &w1;
    x1w1.set_label("x1*w1");
    let x2w2 = &x2 * &w2;
    x2w2.set_label("x2*w2");
    let n = &x1w1 + &x2w2 + &b;
    n.set_label("n");
    let o = n.tanh();
    o.set_label("o");

    o.backward()?;

    for node in [&x1, &w1, &x2, &w2, &b, &n, &o] {
        eprintln!("{:>6}: {}", node.label().unwrap_or_default(), node);
    }

    let stdout = std::io::stdout();
    write_dot(&o, &mut stdout.lock())?;
    Ok(())
}
