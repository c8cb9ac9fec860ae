use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Logs go to stderr; stdout is reserved for the sorted names.
///
/// `directive` comes from the config file and is used when `RUST_LOG` is unset.
pub fn init_cli_logger(verbose: bool, directive: Option<&str>) {
    let default_directive = match (verbose, directive) {
        (true, _) => "name_sorter=debug,info",
        (false, Some(directive)) => directive,
        (false, None) => "name_sorter=warn",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
