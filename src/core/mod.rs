pub mod cache;
pub mod calibration;
pub mod etl;
pub mod stats;
pub mod syllables;

pub use crate::domain::model::{NameRecord, SyllableBatch};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
