pub mod hc;
pub mod parameter_mapping;
