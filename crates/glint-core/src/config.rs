/// Library-wide settings consumed by `glint::init`.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directives. `None` defers to `RUST_LOG`.
    pub log_filter: Option<String>,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: None,
            profiling: ProfilingMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling scopes are not recorded
    Off,
    /// Scopes are recorded for in-process inspection
    On,
    /// Scopes are recorded and served to `puffin_viewer` over HTTP
    WithWebServer,
}
