// src/train/mod.rs
// Full-batch training loop over `Module`s with squared-error loss and SGD.

pub mod config;
pub mod trainer;

pub use config::TrainConfig;
pub use trainer::{fit, predict, total_loss, Sample, TrainingHistory};
