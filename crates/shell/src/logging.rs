use anyhow::Result;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber. `RUST_LOG` refines the directive; stdout stays
/// reserved for replies.
pub fn init(filter: Option<&str>) -> Result<()> {
    let directive: Directive = filter.unwrap_or(DEFAULT_DIRECTIVE).parse()?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_and_repeat_init() {
        assert!(init(None).is_ok());
        assert!(init(Some("debug")).is_ok());
    }
}
