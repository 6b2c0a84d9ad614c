pub mod complex;
pub mod orbit_outcome;
pub mod sink_key;
