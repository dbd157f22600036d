pub mod chart;
pub mod datapoint;
pub mod generation;
pub mod settings;
