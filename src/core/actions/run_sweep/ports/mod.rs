pub mod orbit_engine;
