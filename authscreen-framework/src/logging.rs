/// Which log backend a host installs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoggerKind {
    /// Structured output with key/values, pretty in a terminal and JSON otherwise
    #[default]
    Femme,
    /// `RUST_LOG`-filtered plain text
    EnvLogger,
}

/// Installs the global logger. Call once, early in `main`.
pub fn init_logging(kind: LoggerKind) {
    match kind {
        LoggerKind::Femme => femme::start(),
        LoggerKind::EnvLogger => {
            // A host or test harness may already have installed one
            let _ = env_logger::try_init();
        }
    }
}
