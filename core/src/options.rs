//! Configuration for kernel scenarios.

use crate::validate::DEFAULT_MARGIN;

/// Options controlling how a kernel scenario is generated and checked.
///
/// # Example
///
/// ```
/// use fieldexpr_core::ScenarioOptions;
///
/// let options = ScenarioOptions {
///     len: 1024,
///     ..ScenarioOptions::default()
/// };
/// assert_eq!(options.seed, 42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOptions {
    /// Number of elements in every field.
    ///
    /// Default: 5
    pub len: usize,

    /// Seed for the random radii.
    ///
    /// Default: 42
    pub seed: u64,

    /// Absolute tolerance when comparing strategies.
    ///
    /// Default: 1e-3
    pub margin: f64,
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self {
            len: 5,
            seed: 42,
            margin: DEFAULT_MARGIN,
        }
    }
}
