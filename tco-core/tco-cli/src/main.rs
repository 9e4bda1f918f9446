use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

mod cli;
mod input;
mod output;

use cli::{Cli, Commands};
use output::{money, print_one, print_out, source_label};
use tco_core::comparison::{ComparisonEngine, ComparisonReport};
use tco_core::config::TcoConfig;
use tco_core::cost::{CostCalculator, CostSummary, DepreciatedCost};
use tco_core::maintenance::MaintenanceProjection;
use tco_core::observability::setup_logging;
use tco_core::VehicleRecord;

/// A per-vehicle result tagged with the vehicle it belongs to
#[derive(Serialize)]
struct Named<T: Serialize> {
    name: String,
    #[serde(flatten)]
    data: T,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TcoConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TcoConfig::default(),
    };
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    setup_logging(&config.logging);

    let calculator = CostCalculator::with_assumptions(config.assumptions());

    match cli.command {
        Commands::Summary { ref file } => {
            let summaries = summarize(&calculator, &load(file, &config)?)?;
            print_out(cli.json, &summaries, |s| {
                format!(
                    "{}\ttotal {}\tper year {}\tper mile {}\tfuel/yr {}\tmaintenance/yr {} ({})",
                    s.name,
                    money(s.data.total_cost),
                    money(s.data.cost_per_year),
                    money(s.data.cost_per_mile),
                    money(s.data.fuel_cost_per_year),
                    money(s.data.maintenance_cost_per_year),
                    source_label(s.data.maintenance_source),
                )
            })?;
        }
        Commands::Maintenance { ref file, ref vehicle } => {
            let mut records = load(file, &config)?;
            if let Some(name) = vehicle {
                records.retain(|r| &r.name == name);
                if records.is_empty() {
                    bail!("no vehicle named '{}' in {}", name, file.display());
                }
            }
            let projections = project_maintenance(&calculator, &records)?;
            print_out(cli.json, &projections, |p| {
                let mut text = format!(
                    "{}\taverage {}/yr ({})\ttotal {}\t{:.1}% of price",
                    p.name,
                    money(p.data.average_annual_cost),
                    source_label(p.data.source),
                    money(p.data.total_cost),
                    p.data.share_of_purchase_price,
                );
                for (estimate, cumulative) in p.data.yearly.iter().zip(p.data.cumulative_costs()) {
                    let _ = write!(
                        text,
                        "\n  year {}\t{}\tcumulative {}",
                        estimate.year,
                        money(estimate.cost),
                        money(cumulative)
                    );
                }
                text
            })?;
        }
        Commands::Compare { ref file } => {
            let engine = ComparisonEngine::new(calculator);
            let report = engine.compare(&load(file, &config)?)?;
            print_one(cli.json, report, render_comparison)?;
        }
        Commands::PerMile { ref file } => {
            let engine = ComparisonEngine::new(calculator);
            let breakdowns = engine.per_mile_breakdown(&load(file, &config)?)?;
            print_out(cli.json, &breakdowns, |b| {
                format!(
                    "{}\tpurchase {:.4}\tfuel {:.4}\tinsurance {:.4}\tmaintenance {:.4}\ttotal {:.4}",
                    b.name, b.purchase, b.fuel, b.insurance, b.maintenance, b.total
                )
            })?;
        }
        Commands::Depreciation { ref file } => {
            let views = depreciate(&calculator, &load(file, &config)?)?;
            print_out(cli.json, &views, |d| {
                format!(
                    "{}\trate {:.0}%\tresidual {}\tannual {}\tper mile {}\tnet lifetime {}",
                    d.name,
                    d.data.depreciation_rate * 100.0,
                    money(d.data.residual_value),
                    money(d.data.annual_cost),
                    money(d.data.cost_per_mile),
                    money(d.data.net_lifetime_cost),
                )
            })?;
        }
        Commands::CheckConfig => {
            config.validate()?;
            if cli.json {
                print_one(true, &config, |_| String::new())?;
            } else {
                println!("config valid");
                print!("{}", config.to_toml_string()?);
            }
        }
    }

    Ok(())
}

fn load(path: &Path, config: &TcoConfig) -> Result<Vec<VehicleRecord>> {
    input::load_vehicles(path, config)
}

fn summarize(calculator: &CostCalculator, records: &[VehicleRecord]) -> Result<Vec<Named<CostSummary>>> {
    let engine = ComparisonEngine::new(calculator.clone());
    Ok(engine
        .cost_all(records)?
        .into_iter()
        .map(|costed| Named {
            name: costed.vehicle.name,
            data: costed.summary,
        })
        .collect())
}

fn project_maintenance(
    calculator: &CostCalculator,
    records: &[VehicleRecord],
) -> Result<Vec<Named<MaintenanceProjection>>> {
    records
        .iter()
        .map(|record| {
            record
                .validate()
                .with_context(|| format!("vehicle '{}'", record.name))?;
            let data = calculator
                .estimator()
                .projection(record)
                .with_context(|| format!("vehicle '{}'", record.name))?;
            Ok(Named {
                name: record.name.clone(),
                data,
            })
        })
        .collect()
}

fn depreciate(calculator: &CostCalculator, records: &[VehicleRecord]) -> Result<Vec<Named<DepreciatedCost>>> {
    let engine = ComparisonEngine::new(calculator.clone());
    Ok(engine
        .cost_all(records)?
        .iter()
        .map(|costed| Named {
            name: costed.vehicle.name.clone(),
            data: calculator.depreciated(&costed.vehicle),
        })
        .collect())
}

fn render_comparison(report: &ComparisonReport) -> String {
    let mut text = String::new();
    for point in &report.trajectory {
        let costs: Vec<String> = point
            .vehicles
            .iter()
            .map(|entry| format!("{} {}", entry.name, money(entry.cumulative_cost)))
            .collect();
        let _ = writeln!(text, "year {}\t{}", point.year, costs.join("\t"));
    }

    let ranking = &report.ranking;
    match &ranking.lowest {
        Some(lowest) => {
            let _ = write!(
                text,
                "lowest after {} years: {} ({})",
                ranking.horizon_years,
                lowest.name,
                money(lowest.cumulative_cost)
            );
            for entry in &ranking.savings {
                let _ = write!(
                    text,
                    "\n  {} costs {} more ({:.1}%)",
                    entry.name,
                    money(entry.savings),
                    entry.percentage
                );
            }
        }
        None => text.push_str("ranking needs at least two vehicles"),
    }
    text
}
