use anyhow::Context;
use quote_engine::utils::{format_currency, format_term};
use quote_engine::{CatalogSnapshot, setup_environment, top_recommendations};

fn main() -> anyhow::Result<()> {
    let config = setup_environment()?;

    let target: f64 = std::env::args()
        .nth(1)
        .context("usage: quote-engine <target monthly payment>")?
        .trim_start_matches('$')
        .parse()
        .context("target monthly payment must be a number")?;

    let snapshot = CatalogSnapshot::load_or_default(config.catalog_path.as_deref())?;
    tracing::info!(
        packages = snapshot.packages.len(),
        financing_options = snapshot.financing_options.len(),
        "Searching recommendations for {}",
        format_currency(target)
    );

    let matches = top_recommendations(
        target,
        &snapshot.packages,
        &snapshot.financing_options,
        None,
        &config.policy,
    )?;

    if matches.is_empty() {
        println!(
            "No package within {:.0}% of {}/month",
            config.policy.match_band * 100.0,
            format_currency(target)
        );
        return Ok(());
    }

    for (rank, m) in matches.iter().enumerate() {
        println!(
            "{}. {} | {} {} @ {}% | {}/month (save {})",
            rank + 1,
            m.package.name,
            m.option.name,
            format_term(m.term),
            m.rate,
            format_currency(m.monthly_payment),
            format_currency(m.savings)
        );
    }

    Ok(())
}
