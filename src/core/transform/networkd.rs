use crate::core::config::Config;
use crate::core::machine::{MachineConfig, NetworkdUnit};
use crate::core::report::Report;
use crate::core::transform::{ConfigTransform, TransformContext};
use crate::core::unit_file::{SystemdUnitParser, UnitFileParser};

/// Copies `networkd.units` and checks that their contents parse.
#[derive(Debug, Default)]
pub struct NetworkdTransform<P = SystemdUnitParser> {
    parser: P,
}

impl NetworkdTransform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: UnitFileParser> ConfigTransform for NetworkdTransform<P> {
    fn name(&self) -> &'static str {
        "NetworkdTransform"
    }

    fn transform(
        &self,
        input: &Config,
        mut output: MachineConfig,
        _context: &TransformContext,
    ) -> (MachineConfig, Report) {
        let mut report = Report::new();
        for (index, unit) in input.networkd.units.iter().enumerate() {
            if !unit.contents.is_empty() {
                if let Err(err) = self.parser.deserialize(&unit.contents) {
                    let mut unit_report = Report::new();
                    unit_report.add_error(format!(
                        "networkd unit {:?} could not be parsed: {}",
                        unit.name, err
                    ));
                    report.merge(unit_report.at(&format!("networkd.units.{index}")));
                }
            }
            output.networkd.units.push(NetworkdUnit {
                name: unit.name.clone(),
                contents: unit.contents.clone(),
            });
        }
        (output, report)
    }
}
