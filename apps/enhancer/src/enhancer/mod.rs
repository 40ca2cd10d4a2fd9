// Prompt enhancement pipeline.
// Stages are pure functions; `pipeline` wires them together for the three tools.

pub mod ambiguity;
pub mod constraints;
pub mod formatter;
pub mod guards;
pub mod output_format;
pub mod pipeline;
pub mod prompts;
