//! Transforms that render the input config into a machine config.
//!
//! Each [`ConfigTransform`] owns one slice of the input document. The driver in
//! [`pipeline`] threads a single machine config and report through every registered
//! transform in registration order; later transforms see what earlier ones produced.

use crate::core::config::Config;
use crate::core::machine::MachineConfig;
use crate::core::report::Report;
use crate::core::types::Platform;

mod networkd;
pub mod pipeline;
mod registry;
pub mod systemd;
mod version;

pub use networkd::NetworkdTransform;
pub use pipeline::{run, transpile};
pub use registry::TransformRegistry;
pub use systemd::{convert_unit, is_enabled, validate_unit, validate_unit_with, SystemdTransform};
pub use version::IgnitionVersionTransform;

/// Run-wide facts handed to every transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformContext {
    pub platform: Option<Platform>,
}

impl TransformContext {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform: Some(platform),
        }
    }
}

/// Pure transform from one slice of the input config into the machine config.
///
/// Problems found along the way go into the returned report; a transform never aborts the
/// run, so it always hands back the (possibly partial) output it was given plus its additions.
pub trait ConfigTransform {
    fn name(&self) -> &'static str;
    fn transform(
        &self,
        input: &Config,
        output: MachineConfig,
        context: &TransformContext,
    ) -> (MachineConfig, Report);
}
