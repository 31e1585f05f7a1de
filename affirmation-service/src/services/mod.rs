pub mod parser;
pub mod prompt;
pub mod providers;

pub use parser::parse_affirmations;
pub use prompt::build_prompt;
