//! Structured tracing helpers.

use tracing_subscriber::EnvFilter;

/// Workspace crates whose logs `--verbose` turns up.
const WORKSPACE_TARGETS: [&str; 6] = [
    "framework_adapters",
    "framework_config",
    "framework_demo",
    "framework_prompts",
    "framework_runner",
    "framework_telemetry",
];

/// Filter directives used when `RUST_LOG` is not set.
#[must_use]
pub fn default_directives(verbose: bool) -> String {
    if !verbose {
        return "warn".to_owned();
    }
    let mut directives = vec!["warn".to_owned()];
    directives.extend(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}=debug")),
    );
    directives.join(",")
}

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the defaults. Logs go to stderr so that
/// comparison output on stdout stays clean. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, "tracing initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(default_directives(false), "warn");
    }

    #[test]
    fn verbose_enables_workspace_debug() {
        let directives = default_directives(true);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("framework_runner=debug"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn init_is_idempotent() {
        init(false);
        init(true);
    }
}
