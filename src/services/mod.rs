pub mod classifier;
pub mod documents;
pub mod prompts;

pub use classifier::*;
pub use documents::*;
pub use prompts::PromptTemplate;
