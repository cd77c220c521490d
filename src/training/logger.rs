//! Training log output with verbosity levels.

/// How much the grower reports while building a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Summary when a tree finishes growing.
    Info,
    /// Per-node details (forced leaves, chosen splits).
    Debug,
}

/// Writes training progress to stderr, filtered by verbosity.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Info {
            eprintln!("[pixeltree] {message}");
        }
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Debug {
            eprintln!("[pixeltree] {message}");
        }
    }
}
