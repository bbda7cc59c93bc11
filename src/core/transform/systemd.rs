use crate::core::config::{Config, SystemdDropin, SystemdUnit};
use crate::core::machine::{Dropin, MachineConfig, Unit};
use crate::core::report::Report;
use crate::core::transform::{ConfigTransform, TransformContext};
use crate::core::unit_file::{has_section, SystemdUnitParser, UnitFileParser};

const INSTALL_SECTION: &str = "Install";

/// Converts `systemd.units` and sense-checks each converted unit.
#[derive(Debug, Default)]
pub struct SystemdTransform<P = SystemdUnitParser> {
    parser: P,
}

impl SystemdTransform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: UnitFileParser> SystemdTransform<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: UnitFileParser> ConfigTransform for SystemdTransform<P> {
    fn name(&self) -> &'static str {
        "SystemdTransform"
    }

    fn transform(
        &self,
        input: &Config,
        mut output: MachineConfig,
        _context: &TransformContext,
    ) -> (MachineConfig, Report) {
        let mut report = Report::new();
        for (index, unit) in input.systemd.units.iter().enumerate() {
            let converted = convert_unit(unit);
            let unit_report =
                validate_unit_with(&self.parser, &converted).at(&format!("systemd.units.{index}"));
            tracing::debug!(
                unit = %converted.name,
                dropins = converted.dropins.len(),
                entries = unit_report.len(),
                "converted systemd unit"
            );
            report.merge(unit_report);
            output.systemd.units.push(converted);
        }
        (output, report)
    }
}

/// Field-for-field copy of an input unit. Never fails and never validates.
pub fn convert_unit(unit: &SystemdUnit) -> Unit {
    Unit {
        name: unit.name.clone(),
        enable: unit.enable,
        enabled: unit.enabled,
        mask: unit.mask,
        contents: unit.contents.clone(),
        dropins: unit.dropins.iter().map(convert_dropin).collect(),
    }
}

fn convert_dropin(dropin: &SystemdDropin) -> Dropin {
    Dropin {
        name: dropin.name.clone(),
        contents: dropin.contents.clone(),
    }
}

/// Either spelling of "enabled" turns the unit on; an unset `enabled` is not `false`.
pub fn is_enabled(unit: &Unit) -> bool {
    unit.enable || unit.enabled.is_on()
}

/// Sense-check one converted unit with the stock unit-file parser.
pub fn validate_unit(unit: &Unit) -> Report {
    validate_unit_with(&SystemdUnitParser, unit)
}

/// Sense-check one converted unit.
///
/// Units without inline contents pass. Contents that do not parse yield a single error and
/// nothing else is checked. Parsed contents lacking `[Install]` on an enabled unit yield a
/// warning, since enabling has nothing to wire up.
pub fn validate_unit_with<P: UnitFileParser + ?Sized>(parser: &P, unit: &Unit) -> Report {
    let mut report = Report::new();
    if unit.contents.is_empty() {
        return report;
    }

    let sections = match parser.deserialize(&unit.contents) {
        Ok(sections) => sections,
        Err(err) => {
            report.add_error(format!(
                "systemd unit {:?} could not be parsed: {}",
                unit.name, err
            ));
            return report;
        }
    };

    if is_enabled(unit) && !has_section(&sections, INSTALL_SECTION) {
        report.add_warning(format!(
            "systemd unit {:?} has no [Install] section; 'enabled' will do nothing",
            unit.name
        ));
    }

    report
}
