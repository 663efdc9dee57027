use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Shape of diagnostics on stderr. Stdout is reserved for per-page status
/// lines and the run summary, whatever the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// `--json` runs are usually piped into other tools, so their logs are JSON too.
    pub fn for_output(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

/// Directive used when `RUST_LOG` is unset. Verbose runs show per-page
/// decisions (ignored files, missing sibling pages, dry-run skips).
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "related_services=debug,info"
    } else {
        "related_services=info"
    }
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_follows_json_flag() {
        assert_eq!(LogFormat::for_output(true), LogFormat::Json);
        assert_eq!(LogFormat::for_output(false), LogFormat::Compact);
    }

    #[test]
    fn test_default_directive_parses() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
        assert!(default_directive(true).contains("debug"));
    }
}
