//! Monte Carlo simulation configuration.

/// Configuration for one Monte Carlo pricing run.
///
/// The engine does not validate the configuration; a `path_count` of zero
/// produces a `0/0` average rather than an error, matching the permissive
/// contract of the whole kernel. The service boundary rejects such requests
/// before they get here.
///
/// # Examples
///
/// ```rust
/// use pricer_engines::mc::SimulationConfig;
///
/// let config = SimulationConfig::new(100_000).collect_terminal_prices(true);
/// assert_eq!(config.path_count(), 100_000);
/// assert!(config.collects_terminal_prices());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of independent paths to simulate.
    path_count: usize,
    /// Whether to record each path's terminal price for distribution
    /// inspection.
    collect_terminal_prices: bool,
}

impl SimulationConfig {
    /// Creates a configuration for the given number of paths.
    #[inline]
    pub fn new(path_count: usize) -> Self {
        Self {
            path_count,
            collect_terminal_prices: false,
        }
    }

    /// Enables or disables terminal-price collection.
    #[inline]
    pub fn collect_terminal_prices(mut self, collect: bool) -> Self {
        self.collect_terminal_prices = collect;
        self
    }

    /// Returns the number of paths to simulate.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Returns whether terminal prices are recorded.
    #[inline]
    pub fn collects_terminal_prices(&self) -> bool {
        self.collect_terminal_prices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_collection_defaults_off() {
        let config = SimulationConfig::new(1000);
        assert!(!config.collects_terminal_prices());
    }

    #[test]
    fn builder_toggles_terminal_collection() {
        let config = SimulationConfig::new(1000).collect_terminal_prices(true);
        assert!(config.collects_terminal_prices());
    }
}
