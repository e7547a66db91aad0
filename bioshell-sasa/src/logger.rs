/// Collaborator through which the core reports non-fatal conditions.
///
/// The core never reaches into process-global logging state directly; it
/// always goes through a [`SasaLogger`] so a caller embedding this crate can
/// redirect, collect, or silence messages without touching the `log` crate's
/// global logger.
pub trait SasaLogger {
    /// Reports a non-fatal condition, such as an empty structure or a
    /// requested thread count that could not be honored.
    fn warn(&self, msg: &str);
}

/// Default logger: forwards to the `log` crate, the same way the rest of
/// the BioShell workspace reports diagnostics (`bioshell-pdb`'s `load_pdb`
/// and `load_cif` modules use `log::{debug, info, warn}` directly).
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLogger;

impl SasaLogger for DefaultLogger {
    fn warn(&self, msg: &str) {
        log::warn!("{msg}");
    }
}

/// A logger that discards every message; useful for tests and for callers
/// that collect warnings through [`crate::SasaStatus`] instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl SasaLogger for NullLogger {
    fn warn(&self, _msg: &str) {}
}
