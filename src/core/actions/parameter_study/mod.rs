pub mod parameter_study;
