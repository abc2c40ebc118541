pub mod types;
mod lines;
mod logging;
mod similarity;

pub use types::{Cli, Command, LinesArgs, SimilarityArgs};
pub use lines::cmd_lines;
pub use logging::init_tracing;
pub use similarity::cmd_similarity;
