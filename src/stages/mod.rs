pub mod extract;
pub mod followup;
pub mod pipeline;
pub mod summarize;
pub mod transcribe;

pub use extract::*;
pub use followup::*;
pub use pipeline::*;
pub use summarize::*;
pub use transcribe::*;
