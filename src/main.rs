use std::error::Error;
use std::sync::Arc;
use vpc_context_provider::config::{OutputFormat, Settings};
use vpc_context_provider::output::{print_response_json, print_summary};
use vpc_context_provider::{lookup_vpc_context, SnapshotSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let settings = Settings::from_env()?;
    let source = Arc::new(SnapshotSource::from_file(&settings.snapshot_file)?);

    // Lookups are independent; run them side by side and report in request order.
    let handles: Vec<_> = settings
        .queries()
        .into_iter()
        .map(|query| {
            let source = Arc::clone(&source);
            tokio::task::spawn_blocking(move || lookup_vpc_context(source.as_ref(), &query))
        })
        .collect();

    for handle in handles {
        let response = handle.await??;
        match settings.output {
            OutputFormat::Json => print_response_json(&response)?,
            OutputFormat::Table => print_summary(&response),
        }
    }

    log::info!("#End main()");
    Ok(())
}
