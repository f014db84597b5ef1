use std::env;
use std::sync::OnceLock;

/// Output positions below which `execute` stays on the calling thread.
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 4096;

static ENV_CONFIG: OnceLock<ExecConfig> = OnceLock::new();

/// Execution options shared by the CPU kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecConfig {
    /// Allow rayon to split the output range across worker threads.
    pub parallel: bool,
    /// Minimum number of output positions handed to one rayon task.
    pub min_parallel_len: usize,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }
}

impl ExecConfig {
    /// Run everything on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Process-wide config, read from the environment on first use.
    pub fn global() -> &'static ExecConfig {
        ENV_CONFIG.get_or_init(Self::from_env)
    }

    /// Read `ARGKERN_PARALLEL` and `ARGKERN_PAR_MIN_LEN`, falling back to defaults.
    ///
    /// Re-reads the environment on every call; kernels use `global()`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var("ARGKERN_PARALLEL") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => config.parallel = false,
                "1" | "true" | "on" => config.parallel = true,
                other => crate::warning!("ignoring ARGKERN_PARALLEL={}", other),
            }
        }
        if let Ok(raw) = env::var("ARGKERN_PAR_MIN_LEN") {
            match raw.trim().parse::<usize>() {
                Ok(len) if len > 0 => config.min_parallel_len = len,
                _ => crate::warning!("ignoring ARGKERN_PAR_MIN_LEN={}", raw),
            }
        }
        config
    }

    pub(crate) fn should_parallelize(&self, positions: usize) -> bool {
        self.parallel && positions >= self.min_parallel_len.saturating_mul(2)
    }
}
