use super::*;
use crate::nn::module::to_leaves;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_output_per_neuron() {
    let layer = Layer::from_neurons(vec![
        Neuron::from_parameters(vec![1.0, 1.0], 0.0, Activation::Linear),
        Neuron::from_parameters(vec![2.0, -1.0], 1.0, Activation::Linear),
        Neuron::from_parameters(vec![0.0, 0.0], -4.0, Activation::Relu),
    ])
    .unwrap();
    let out = layer.forward(&to_leaves(&[3.0, 4.0])).unwrap();
    let values: Vec<f64> = out.iter().map(Value::value).collect();
    assert_eq!(values, vec![7.0, 3.0, 0.0]);
    assert_eq!(layer.nin(), 2);
    assert_eq!(layer.nout(), 3);
}

#[test]
fn test_layer_parameters_and_names() {
    let mut rng = StdRng::seed_from_u64(1);
    let layer = Layer::new(3, 2, Activation::Tanh, &mut rng).unwrap();
    assert_eq!(layer.num_parameters(), 8);

    let named = layer.named_parameters();
    assert_eq!(named[0].0, "neurons.0.weight.0");
    assert_eq!(named[3].0, "neurons.0.bias");
    assert_eq!(named[7].0, "neurons.1.bias");
    assert!(named[7].1.ptr_eq(&layer.parameters()[7]));
}

#[test]
fn test_layer_rejects_bad_shapes() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        Layer::new(3, 0, Activation::Tanh, &mut rng),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Layer::from_neurons(vec![
            Neuron::from_parameters(vec![1.0], 0.0, Activation::Tanh),
            Neuron::from_parameters(vec![1.0, 2.0], 0.0, Activation::Tanh),
        ]),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
}
