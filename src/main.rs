use clap::Parser;
use name_sorter::core::ConfigProvider;
use name_sorter::utils::{logger, validation::Validate};
use name_sorter::{
    AppConfig, CliConfig, ConsoleNameWriter, FileNameReader, FileNameWriter, LastNameFirstSorter,
    NameSorterEngine, NameSorterError, NameWriter, SpaceDelimitedParser,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    logger::init_cli_logger(cli.verbose, config.log_directive.as_deref());
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let engine = build_engine(&config);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "Sorted {} names to {} destinations",
                summary.records,
                summary.writers
            );
        }
        Err(e) => {
            tracing::error!(
                "Name sort failed: {} (Category: {:?})",
                e,
                e.category()
            );
            exit_with(&e);
        }
    }
}

fn build_engine(
    config: &AppConfig,
) -> NameSorterEngine<FileNameReader<SpaceDelimitedParser>, LastNameFirstSorter> {
    let reader = FileNameReader::new(config.input_path(), SpaceDelimitedParser::new());

    let mut writers: Vec<Box<dyn NameWriter>> = Vec::new();
    if config.console_output() {
        writers.push(Box::new(ConsoleNameWriter::stdout()));
    }
    writers.push(Box::new(FileNameWriter::new(config.output_path())));

    NameSorterEngine::new(reader, LastNameFirstSorter::new(), writers)
}

fn exit_with(e: &NameSorterError) -> ! {
    eprintln!("Error: {}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
