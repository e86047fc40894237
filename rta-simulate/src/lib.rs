pub mod config;
pub mod generate;

pub use config::SimulationConfig;
pub use generate::generate_trials;
