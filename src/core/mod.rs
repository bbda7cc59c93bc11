pub mod config;
pub mod error;
pub mod machine;
pub mod report;
pub mod transform;
pub mod types;
pub mod unit_file;

pub use config::{Config, ConfigLoader};
pub use error::AppError;
pub use machine::MachineConfig;
pub use report::{Entry, EntryKind, Report};
pub use transform::{ConfigTransform, TransformContext, TransformRegistry};
pub use types::*;
