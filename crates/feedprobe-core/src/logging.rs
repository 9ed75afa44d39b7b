//! Logging init: stderr subscriber scoped to the caller.
//!
//! stdout is reserved for the feed body, so diagnostics always go to stderr.

use tracing::subscriber::DefaultGuard;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// How chatty the binary should be. `RUST_LOG` directives still apply on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors (rejected probes, discovery failure).
    #[default]
    Quiet,
    /// Everything down to debug, including each probe attempt.
    Verbose,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }

    pub fn level(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::DEBUG,
        }
    }
}

fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity.level().into())
        .from_env_lossy()
}

/// Install a stderr subscriber for the current thread.
///
/// Logging stays active while the returned guard is alive; keep it in `main`.
pub fn init_logging(verbosity: Verbosity) -> DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
