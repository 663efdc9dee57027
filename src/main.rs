use clap::Parser;
use related_services::utils::{logger, validation::Validate};
use related_services::{
    summary_line, AnnotateEngine, AnnotateError, Catalog, CatalogConfig, CliConfig, LocalStorage,
    PageAnnotator, RunSummary,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(logger::LogFormat::for_output(config.json), config.verbose);

    tracing::info!("Starting related-services");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let catalog = match load_catalog(config.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => fail(&e),
    };

    let storage = LocalStorage::new(config.dir.clone());
    let json = config.json;
    let annotator = match PageAnnotator::new(storage, catalog) {
        Ok(annotator) => annotator,
        Err(e) => fail(&e),
    };
    let engine = AnnotateEngine::new(annotator, config);

    match engine.run().await {
        Ok(summary) => print_summary(&summary, json)?,
        Err(e) => fail(&e),
    }

    Ok(())
}

fn load_catalog(path: Option<&str>) -> related_services::Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::embedded());
    };

    tracing::info!("📁 Loading catalog from {}", path);
    let catalog_config = CatalogConfig::from_file(path)?;
    catalog_config.validate()?;
    Ok(catalog_config.into_catalog())
}

fn print_summary(summary: &RunSummary, json: bool) -> related_services::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("\n{}", summary_line(summary));
    }
    Ok(())
}

fn fail(e: &AnnotateError) -> ! {
    tracing::error!(
        "❌ Run aborted: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
