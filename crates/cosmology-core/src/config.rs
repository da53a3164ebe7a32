//! Density registry configuration

/// Density registry configuration
///
/// The default never seals and never traces.
#[derive(Clone, Debug, Default)]
pub struct RegistryConfig {
    /// Seal the registry the first time a density is dispatched through it
    pub seal_on_first_dispatch: bool,
    /// Emit a trace event for every dispatch decision
    pub trace_dispatch: bool,
}

impl RegistryConfig {
    /// Registry that freezes itself once lookups start
    pub fn sealing() -> Self {
        RegistryConfig {
            seal_on_first_dispatch: true,
            ..Default::default()
        }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace_dispatch = trace;
        self
    }
}
