use crate::core::config::Config;
use crate::core::machine::MachineConfig;
use crate::core::report::{EntryKind, Report};
use crate::core::transform::{TransformContext, TransformRegistry};

/// Run every registered transform in order, threading output and report through them.
///
/// Always completes: report errors are collected, never raised, so callers decide whether
/// a fatal report should stop them.
pub fn run(
    registry: &TransformRegistry,
    input: &Config,
    context: &TransformContext,
) -> (MachineConfig, Report) {
    let run_span = tracing::info_span!(
        "transpile",
        platform = ?context.platform,
        transforms = registry.len()
    );
    let _run = run_span.enter();

    let mut output = MachineConfig::default();
    let mut report = Report::new();
    for transform in registry.iter() {
        let span = tracing::debug_span!("transform", name = transform.name());
        let _entered = span.enter();
        let (next, transform_report) = transform.transform(input, output, context);
        tracing::debug!(
            entries = transform_report.len(),
            fatal = transform_report.is_fatal(),
            "transform finished"
        );
        report.merge(transform_report);
        output = next;
    }
    if report.is_fatal() {
        tracing::warn!(
            errors = report.count(EntryKind::Error),
            "transpile produced errors"
        );
    }
    (output, report)
}

/// [`run`] with the built-in transforms.
pub fn transpile(input: &Config, context: &TransformContext) -> (MachineConfig, Report) {
    run(&TransformRegistry::with_defaults(), input, context)
}
