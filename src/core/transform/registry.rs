use crate::core::transform::{
    ConfigTransform, IgnitionVersionTransform, NetworkdTransform, SystemdTransform,
};

/// Ordered list of transforms for a transpile run.
///
/// Built once by the caller and handed to [`crate::core::transform::run`]. Registration order
/// is execution order; nothing is deduplicated or removed.
///
/// # Examples
///
/// ```
/// use unitforge::core::config::Config;
/// use unitforge::core::transform::{
///     run, IgnitionVersionTransform, SystemdTransform, TransformContext, TransformRegistry,
/// };
///
/// let mut registry = TransformRegistry::new();
/// registry.register(IgnitionVersionTransform);
/// registry.register(SystemdTransform::new());
///
/// let config = Config::default();
/// let (machine, report) = run(&registry, &config, &TransformContext::default());
/// assert_eq!(machine.ignition.version, "2.1.0");
/// assert!(report.is_empty());
/// ```
#[derive(Default)]
pub struct TransformRegistry {
    transforms: Vec<Box<dyn ConfigTransform>>,
}

impl TransformRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TransformRegistry {
            transforms: Vec::new(),
        }
    }

    /// Append a transform after those already registered.
    pub fn register<T: ConfigTransform + 'static>(&mut self, transform: T) {
        tracing::trace!(name = transform.name(), "registering transform");
        self.transforms.push(Box::new(transform));
    }

    /// Builder form of [`TransformRegistry::register`].
    pub fn with<T: ConfigTransform + 'static>(mut self, transform: T) -> Self {
        self.register(transform);
        self
    }

    /// Transforms in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ConfigTransform> {
        self.transforms.iter().map(|transform| transform.as_ref())
    }

    /// Names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Create a registry with the built-in transforms
    pub fn with_defaults() -> Self {
        Self::new()
            .with(IgnitionVersionTransform)
            .with(SystemdTransform::new())
            .with(NetworkdTransform::new())
    }
}
