/// Invocation-scoped diagnostics.
///
/// Everything goes through the `log` facade under one target, so a host can
/// filter a single module. Warnings and debug notes are also counted, letting
/// the caller see how many files were rejected or overwritten during one run.
#[derive(Debug, Clone)]
pub struct ModuleLog {
    target: String,
    warnings: usize,
    debugs: usize,
}

impl ModuleLog {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            warnings: 0,
            debugs: 0,
        }
    }

    pub fn warn(&mut self, msg: &str) {
        self.warnings += 1;
        log::warn!(target: self.target.as_str(), "{msg}");
    }

    pub fn info(&self, msg: &str) {
        log::info!(target: self.target.as_str(), "{msg}");
    }

    pub fn debug(&mut self, msg: &str) {
        self.debugs += 1;
        log::debug!(target: self.target.as_str(), "{msg}");
    }

    #[inline]
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    #[inline]
    pub fn debugs(&self) -> usize {
        self.debugs
    }
}
