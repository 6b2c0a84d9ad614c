pub mod actions;
pub mod data;
pub mod engine;
pub mod integer_collatz;
pub mod oracles;
pub mod transforms;
pub mod util;
