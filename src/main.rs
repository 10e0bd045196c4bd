use dotenvy::dotenv;
use pricetrix::config::Config;
use pricetrix::engine::{AnalysisRequest, PricingEngine};
use pricetrix::logging;
use pricetrix::models::{Item, PricingResult};
use pricetrix::sampling::SimulatedSampler;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    info!(
        markup = config.default_markup_percent,
        min_results = config.min_results,
        "starting pricing demo"
    );

    let sampler = SimulatedSampler::with_days_back(config.days_back);
    let engine = PricingEngine::new(config, sampler);

    // The kind of entry the listing queue file holds
    let item: Item = serde_json::from_str(
        r#"{
            "title": "RARE VINTAGE Seiko SKX007 Dive Watch Excellent FREE SHIPPING",
            "description": "Classic Seiko automatic diver. The bezel action is crisp and the lume is strong. Serviced last year.",
            "item_specifics": {
                "Brand": "Seiko",
                "Model": "SKX007",
                "Type": "Dive Watch"
            }
        }"#,
    )?;

    let result = engine.analyze(&AnalysisRequest::for_item(item))?;
    println!("Item analysis:");
    print_result(&result);
    println!();

    let result = engine.analyze(
        &AnalysisRequest::for_terms(vec!["Antique brass ship clock".to_string()])
            .with_markup_percent(10.0),
    )?;
    println!("Explicit-terms analysis:");
    print_result(&result);

    Ok(())
}

fn print_result(result: &PricingResult) {
    println!("  Success: {}", result.success);
    if let Some(message) = &result.message {
        println!("  Message: {}", message);
    }
    println!("  Queries tried:");
    for (i, strategy) in result.search_terms.iter().enumerate() {
        println!(
            "    {}. {:?} ({:?}): {}",
            i + 1,
            strategy.strategy,
            strategy.confidence,
            strategy.terms
        );
    }
    if let Some(strategy) = result.successful_strategy {
        println!("  Winning strategy: {:?}", strategy);
    }
    if let Some(analysis) = &result.price_analysis {
        println!(
            "  Sample: {} sold, ${:.2}-${:.2}, median ${:.2}, avg ${:.2}, std ${:.2}",
            analysis.count,
            analysis.min_price,
            analysis.max_price,
            analysis.median_price,
            analysis.average_price,
            analysis.std_deviation
        );
    }
    if let (Some(price), Some(markup)) = (result.suggested_price, result.markup_percent) {
        println!("  Suggested price: ${:.2} ({}% markup)", price, markup);
    }
}
