// Collection report
//
// Prints the summary, facet option counts and one insight for the
// configured store.
//
// Usage: cargo run --bin collection_report [-- <name filter>]

use anyhow::Context;
use succulent_analytics::{
    describe_text, open_store, summarize, AppConfig, FilterResolver, FilterSelection,
    InsightGenerator, PlantCollection,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "succulent_analytics=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();
    let store = open_store(&config.store_path)
        .with_context(|| format!("Failed to open store {}", config.store_path.display()))?;
    let collection = PlantCollection::load(store.as_ref(), &config.derive_options())?;

    let selection = FilterSelection {
        name: std::env::args().nth(1).unwrap_or_default(),
        ..Default::default()
    };
    let view = selection.apply(&collection.view());
    let summary = summarize(&view);

    println!("\n{}", "=".repeat(60));
    println!("COLLECTION REPORT ({})", describe_text(&selection));
    println!("{}", "=".repeat(60));
    println!("  Plants:             {}", summary.total);
    println!("  Alive:              {}", summary.alive);
    println!("  Dead:               {}", summary.dead);
    println!("  Average lifespan:   {}", summary.avg_lifespan_text);
    println!("  Watering interval:  {}", summary.avg_watering_text);
    println!("  Top death cause:    {}", summary.short_cause(15));

    let options = FilterResolver::new(collection.view()).options(&selection);
    println!("\nFilter options:");
    println!("  Genera:    {}", options.genus.len());
    println!("  Species:   {}", options.species.len());
    println!("  Varieties: {}", options.variety.len());

    if !collection.issues().is_empty() {
        println!("\nIntegrity issues: {}", collection.issues().len());
        for issue in collection.issues().iter().take(10) {
            println!("  - {}", issue);
        }
    }

    println!("\nInsight:");
    match InsightGenerator::from_entropy().generate(&view, &selection.genera, &selection.species) {
        Some(insight) => println!("  {}", insight),
        None => println!("  Not enough data for an insight yet"),
    }

    Ok(())
}
