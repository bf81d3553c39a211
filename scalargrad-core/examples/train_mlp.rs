//! # Training a small tanh MLP
//!
//! Fits `Mlp(3, [4, 4, 1])` to four hand-written samples with full-batch gradient
//! descent, first through [`fit`] and then with the loop spelled out: forward,
//! zero the gradients, backward, update.
//!
//! ## Running
//! `cargo run --example train_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module, MseLoss, Reduction};
use scalargrad_core::nn::module::to_leaves;
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::train::{fit, predict, Sample, TrainConfig};
use scalargrad_core::{ScalarGradError, Value};

fn dataset() -> Vec<Sample> {
    vec![
        Sample::new(vec![2.0, 3.0, -1.0], vec![1.0]),
        Sample::new(vec![3.0, -1.0, 0.5], vec![-1.0]),
        Sample::new(vec![0.5, 1.0, 1.0], vec![-1.0]),
        Sample::new(vec![1.0, 1.0, -1.0], vec![1.0]),
    ]
}

fn main() -> Result<(), ScalarGradError> {
    let samples = dataset();
    let mut rng = StdRng::seed_from_u64(42);

    // --- 1. With the training helper ---
    let model = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    println!("Model has {} parameters", model.num_parameters());

    let config = TrainConfig::default().with_epochs(20).with_learning_rate(0.1);
    let history = fit(&model, &samples, &config)?;
    for (epoch, loss) in history.losses.iter().enumerate() {
        println!("{} {:.6}", epoch, loss);
    }
    for sample in &samples {
        println!("{:?} -> {:?} (target {:?})", sample.inputs, predict(&model, &sample.inputs)?, sample.targets);
    }

    // --- 2. The same loop, by hand ---
    let model = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    let criterion = MseLoss::new(Reduction::Sum);
    let mut optimizer = SgdOptimizer::new(model.parameters(), 0.1, 0.0, 0.0)?;

    for epoch in 0..20 {
        // forward pass
        let mut losses = Vec::with_capacity(samples.len());
        for sample in &samples {
            let prediction = model.forward(&to_leaves(&sample.inputs))?;
            losses.push(criterion.calculate(&prediction, &sample.targets)?);
        }
        let loss: Value = losses.iter().sum();

        // backward pass
        optimizer.zero_grad();
        loss.backward()?;

        // update
        optimizer.step()?;

        println!("{} {:.6}", epoch, loss.value());
    }

    Ok(())
}
