use std::sync::Arc;

use clap::Args;

use crate::infra::{sample_project, InMemoryProjectRepository};
use geoquote::config::AppConfig;
use geoquote::error::AppError;
use geoquote::workflows::quote::{
    price, standard_catalog, PricingInput, ProjectRepository, ProjectStage, QuoteService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct PriceArgs {
    /// Number of countries the quote covers
    #[arg(long)]
    pub(crate) countries: u32,
    /// Selected feature ids, in pick order (the first one is free)
    #[arg(long = "feature")]
    pub(crate) features: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Project id used for the demo record
    #[arg(long, default_value = "demo-project")]
    pub(crate) project_id: String,
    /// Region code feeding the quality seeds
    #[arg(long, default_value = "KR")]
    pub(crate) region: String,
    /// Number of countries to price
    #[arg(long, default_value_t = 3)]
    pub(crate) countries: u32,
    /// Selected feature ids, in pick order
    #[arg(long = "feature", default_values_t = ["geocoding".to_string(), "routing".to_string(), "traffic".to_string()])]
    pub(crate) features: Vec<String>,
    /// Skip the quality comparison portion of the demo
    #[arg(long)]
    pub(crate) skip_comparison: bool,
}

fn money(minor_units: u64) -> String {
    format!("{:.2}", minor_units as f64 / 100.0)
}

pub(crate) fn run_price(args: PriceArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let input = PricingInput {
        country_count: args.countries,
        selected_features: args.features,
    };
    let data = price(&config.pricing, &input);

    println!("Price breakdown ({} countries)", data.country_count);
    println!("- base: {}", money(data.base_price));
    println!(
        "- additional features ({} beyond the free one): {}",
        data.selected_features.len().saturating_sub(1),
        money(data.additional_features_price)
    );
    println!("- total: {}", money(data.total_price));

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        project_id,
        region,
        countries,
        features,
        skip_comparison,
    } = args;

    let config = AppConfig::load()?;

    println!("Map-data quote demo");

    let repository = Arc::new(InMemoryProjectRepository::default());
    let service = Arc::new(QuoteService::new(
        repository.clone(),
        config.pricing,
        standard_catalog(),
    ));

    let record = service.register(sample_project(&project_id, &region))?;
    println!(
        "- Registered project {} (region {}) at stage {}",
        record.project.id.0,
        record.project.region,
        record.stage.label()
    );
    let stages: Vec<&str> = ProjectStage::ordered()
        .iter()
        .map(|stage| stage.label())
        .collect();
    println!("  Workflow stages: {}", stages.join(" -> "));

    let resolution = service.resolved_products(&record.project.id)?;
    println!("\nResolved selection ({} products)", resolution.products.len());
    for product in &resolution.products {
        println!(
            "  - {} [{}] by {} ({})",
            product.name, product.id, product.provider, product.format
        );
    }
    if resolution.missing_references > 0 {
        println!(
            "  {} selected id(s) no longer match the catalog and were skipped",
            resolution.missing_references
        );
    }

    let pricing = service.price(
        &record.project.id,
        PricingInput {
            country_count: countries,
            selected_features: features,
        },
    )?;
    println!("\nPrice breakdown ({} countries)", pricing.country_count);
    println!("- base: {}", money(pricing.base_price));
    println!(
        "- additional features: {}",
        money(pricing.additional_features_price)
    );
    println!("- total: {}", money(pricing.total_price));

    if skip_comparison {
        return Ok(());
    }

    let comparison = service.compare(&record.project.id)?;
    println!("\nQuality comparison");
    for (dimension, row) in &comparison.dimensions {
        println!("  {dimension}:");
        for (vendor, cell) in row {
            let marker = comparison
                .best_by_dimension
                .get(dimension)
                .map(|best| best.iter().any(|name| name == vendor))
                .unwrap_or(false);
            println!(
                "    - {vendor}: {} ({}){}",
                cell.score,
                cell.label.label(),
                if marker { " *" } else { "" }
            );
        }
    }
    println!("  Averages:");
    for (vendor, average) in &comparison.summary {
        println!("    - {vendor}: {average:.1}");
    }
    println!("  Best overall: {}", comparison.best_overall.join(", "));

    let stored = repository
        .fetch(&record.project.id)
        .map_err(geoquote::workflows::quote::QuoteServiceError::from)?;
    if let Some(stored) = stored {
        match serde_json::to_string_pretty(&stored.status_view()) {
            Ok(json) => println!("\nPersisted status payload:\n{json}"),
            Err(err) => println!("\nPersisted status payload unavailable: {err}"),
        }
    }

    Ok(())
}
