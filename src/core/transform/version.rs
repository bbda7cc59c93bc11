use crate::core::config::Config;
use crate::core::machine::{MachineConfig, MACHINE_CONFIG_VERSION};
use crate::core::report::Report;
use crate::core::transform::{ConfigTransform, TransformContext};

/// Stamps the machine config schema version.
pub struct IgnitionVersionTransform;

impl ConfigTransform for IgnitionVersionTransform {
    fn name(&self) -> &'static str {
        "IgnitionVersionTransform"
    }

    fn transform(
        &self,
        _input: &Config,
        mut output: MachineConfig,
        _context: &TransformContext,
    ) -> (MachineConfig, Report) {
        output.ignition.version = MACHINE_CONFIG_VERSION.to_string();
        (output, Report::new())
    }
}
