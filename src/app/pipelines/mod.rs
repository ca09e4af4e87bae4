pub mod name_pipeline;

pub use name_pipeline::{NameSyllablePipeline, RunSummary};
