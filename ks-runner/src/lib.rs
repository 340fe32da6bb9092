mod settings;
pub use settings::*;
mod solver;
pub use solver::*;
