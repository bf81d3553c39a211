use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::train::Sample;

// Helpers shared by the integration test crates.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// The four-sample dataset of the classic tanh MLP demo.
#[allow(dead_code)]
pub(crate) fn classic_dataset() -> Vec<Sample> {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];
    xs.iter()
        .zip(ys.iter())
        .map(|(x, &y)| Sample::new(x.to_vec(), vec![y]))
        .collect()
}

#[allow(dead_code)]
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
