use super::*;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::to_leaves;
use crate::utils::testing::check_value_near;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_sizes() {
    let mut rng = StdRng::seed_from_u64(42);
    let model = Mlp::new(3, &[4, 4, 1], &mut rng).unwrap();
    assert_eq!(model.layers().len(), 3);
    assert_eq!(model.nin(), 3);
    assert_eq!(model.nout(), 1);
    assert_eq!(model.num_parameters(), 4 * 4 + 4 * 5 + 5);

    let out = model.forward(&to_leaves(&[2.0, 3.0, -1.0])).unwrap();
    assert_eq!(out.len(), 1);
    assert!(out[0].value().abs() < 1.0);
}

#[test]
fn test_mlp_gradients_reach_every_parameter() {
    let mut rng = StdRng::seed_from_u64(3);
    let model = Mlp::new(2, &[3, 1], &mut rng).unwrap();
    let out = model.forward(&to_leaves(&[0.5, -0.5])).unwrap();
    out[0].backward().unwrap();
    // The output bias always sees the derivative of the final tanh.
    let output_bias = model.parameters().last().cloned().unwrap();
    check_value_near(output_bias.grad(), 1.0 - out[0].value().powi(2), 1e-12);
}

#[test]
fn test_mlp_linear_output() {
    let hidden = Layer::from_neurons(vec![Neuron::from_parameters(vec![1.0], 0.0, Activation::Relu)]).unwrap();
    let output = Layer::from_neurons(vec![Neuron::from_parameters(vec![-2.0], 1.0, Activation::Linear)]).unwrap();
    let model = Mlp::from_layers(vec![hidden, output]).unwrap();

    let out = model.forward(&to_leaves(&[3.0])).unwrap();
    assert_eq!(out[0].value(), -5.0);
    let out = model.forward(&to_leaves(&[-3.0])).unwrap();
    assert_eq!(out[0].value(), 1.0);
}

#[test]
fn test_mlp_with_activations_uses_output_activation_last() {
    let mut rng = StdRng::seed_from_u64(9);
    let model = Mlp::with_activations(
        2,
        &[3, 2],
        Activation::Relu,
        Activation::Linear,
        &Init::Constant(0.5),
        &mut rng,
    )
    .unwrap();
    assert_eq!(model.layers()[0].neurons()[0].activation(), Activation::Relu);
    assert_eq!(model.layers()[1].neurons()[0].activation(), Activation::Linear);

    // hidden: relu(0.5 + 0.5 + 0.5) = 1.5 each; output: 3 * 0.5 * 1.5 + 0.5 = 2.75
    let out = model.forward(&to_leaves(&[1.0, 1.0])).unwrap();
    check_value_near(out[0].value(), 2.75, 1e-12);
    check_value_near(out[1].value(), 2.75, 1e-12);
}

#[test]
fn test_mlp_named_parameters_are_hierarchical() {
    let mut rng = StdRng::seed_from_u64(0);
    let model = Mlp::new(2, &[2, 1], &mut rng).unwrap();
    let names: Vec<String> = model.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names.first().map(String::as_str), Some("layers.0.neurons.0.weight.0"));
    assert_eq!(names.last().map(String::as_str), Some("layers.1.neurons.0.bias"));
    assert_eq!(names.len(), model.num_parameters());
}

#[test]
fn test_mlp_rejects_bad_configuration() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Mlp::new(3, &[], &mut rng),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Mlp::new(3, &[4, 0, 1], &mut rng),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));

    let a = Layer::from_neurons(vec![Neuron::from_parameters(vec![1.0], 0.0, Activation::Tanh)]).unwrap();
    let b = Layer::from_neurons(vec![Neuron::from_parameters(vec![1.0, 1.0], 0.0, Activation::Tanh)]).unwrap();
    assert!(matches!(
        Mlp::from_layers(vec![a, b]),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_mlp_input_mismatch() {
    let mut rng = StdRng::seed_from_u64(0);
    let model = Mlp::new(3, &[2], &mut rng).unwrap();
    assert!(matches!(
        model.forward(&to_leaves(&[1.0])),
        Err(ScalarGradError::InputSizeMismatch { .. })
    ));
}
