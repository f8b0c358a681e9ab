use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use invilytics::dashboard::charts::ChartSet;
use invilytics::dashboard::session::Session;
use invilytics::dashboard::tiles::{cost_tiles, kpi_row, KpiTile};
use invilytics::io::reporting::{csv_string, write_cost_curve, write_kpis};
use invilytics::io::scenario::Scenario;
use invilytics::io::table::{
    render_charts, render_curve_table, render_levels_table, render_tiles_table,
};
use invilytics::logging;
use invilytics::model::inputs::PolicyInputs;
use invilytics::model::outputs::PolicyOutputs;
use invilytics::model::series::{InventoryLevelsChart, InventorySeries, SeriesKind};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "invilytics",
    about = "Inventory policy dashboard: EOQ, reorder point, stockout and budget KPIs"
)]
struct Cli {
    /// JSON scenario file; flags below override its values.
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    #[command(flatten)]
    inputs: InputArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct InputArgs {
    /// Annual demand D (units/yr)
    #[arg(long = "demand")]
    annual_demand: Option<f64>,
    /// Order cost K ($/order)
    #[arg(long = "order-cost")]
    order_cost: Option<f64>,
    /// Holding cost h ($/unit/yr)
    #[arg(long = "holding-cost")]
    holding_cost_per_unit: Option<f64>,
    #[arg(long = "days-per-year")]
    days_per_year: Option<u32>,
    #[arg(long = "lead-time")]
    lead_time_days: Option<u32>,
    /// Average daily demand (units)
    #[arg(long = "daily-demand")]
    avg_daily_demand: Option<f64>,
    /// Standard deviation of daily demand (units)
    #[arg(long = "daily-std-dev")]
    std_dev_daily_demand: Option<f64>,
    /// Service level in percent, 50.0..=99.9
    #[arg(long = "service-level")]
    service_level_percent: Option<f64>,
    /// Use --manual-quantity instead of EOQ (true) or EOQ with variation (false)
    #[arg(long = "override", value_name = "BOOL")]
    manual_override: Option<bool>,
    #[arg(long = "manual-quantity")]
    manual_quantity: Option<f64>,
    /// Annual inventory budget ($)
    #[arg(long)]
    budget: Option<f64>,
    /// Q variation around EOQ (%), 0..=80
    #[arg(long)]
    variation: Option<f64>,
}

impl InputArgs {
    fn apply(&self, inputs: &mut PolicyInputs) {
        if let Some(v) = self.annual_demand {
            inputs.annual_demand = v;
        }
        if let Some(v) = self.order_cost {
            inputs.order_cost = v;
        }
        if let Some(v) = self.holding_cost_per_unit {
            inputs.holding_cost_per_unit = v;
        }
        if let Some(v) = self.days_per_year {
            inputs.days_per_year = v;
        }
        if let Some(v) = self.lead_time_days {
            inputs.lead_time_days = v;
        }
        if let Some(v) = self.avg_daily_demand {
            inputs.avg_daily_demand = v;
        }
        if let Some(v) = self.std_dev_daily_demand {
            inputs.std_dev_daily_demand = v;
        }
        if let Some(v) = self.service_level_percent {
            inputs.service_level_percent = v;
        }
        if let Some(v) = self.manual_override {
            inputs.manual_override_enabled = v;
        }
        if let Some(v) = self.manual_quantity {
            inputs.manual_quantity = v;
        }
        if let Some(v) = self.budget {
            inputs.annual_budget = v;
        }
        if let Some(v) = self.variation {
            inputs.quantity_variation_percent = v;
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// KPI tiles (the default)
    Kpis {
        /// Also write the tiles to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// What-if total cost curve
    Curve {
        /// Write the curve to this CSV file instead of printing it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Datasets for charts 1-6
    Charts,
    /// Inventory levels over time with the reorder point marker
    Levels {
        #[arg(long, value_delimiter = ',')]
        backorders: Option<Vec<u32>>,
        #[arg(long = "inventory-position", value_delimiter = ',')]
        inventory_position: Option<Vec<u32>>,
        #[arg(long = "on-hand", value_delimiter = ',')]
        on_hand: Option<Vec<u32>>,
    },
    /// Print the scenario as JSON: defaults, then the file, then flags
    ScenarioTemplate,
}

#[derive(Serialize)]
struct KpiReport<'a> {
    kpis: &'a [KpiTile],
    cost_tiles: &'a [KpiTile],
    outputs: &'a PolicyOutputs,
}

fn main() -> Result<()> {
    logging::init();
    let mut cli = Cli::parse();

    let command = cli
        .command
        .take()
        .unwrap_or(Commands::Kpis { export: None });
    let scenario = build_scenario(&cli, &command)?;

    let session = Session::new(scenario.inputs.clone(), scenario.series.clone());
    let outputs = session.outputs();
    info!(
        policy = outputs.quantity_policy,
        order_quantity = outputs.order_quantity,
        "computed inventory policy"
    );

    match command {
        Commands::Kpis { export } => {
            let kpis = kpi_row(&outputs);
            let costs = cost_tiles(&outputs);
            print_kpis(&kpis, &costs, &outputs, cli.format)?;
            if let Some(path) = export {
                let all: Vec<KpiTile> = kpis.into_iter().chain(costs).collect();
                write_kpis(&path, &all)
                    .with_context(|| format!("failed writing KPIs to {}", path.display()))?;
            }
        }
        Commands::Curve { out } => {
            let curve = outputs.total_cost_curve;
            if let Some(path) = out {
                let rows = write_cost_curve(&path, &curve)
                    .with_context(|| format!("failed writing curve to {}", path.display()))?;
                println!("Wrote {rows} points to {}", path.display());
            } else {
                match cli.format {
                    OutputFormat::Table => println!("{}", render_curve_table(&curve)),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&curve)?),
                    OutputFormat::Csv => print!("{}", csv_string(&curve)?),
                }
            }
        }
        Commands::Charts => {
            let charts = session.charts();
            print_charts(&charts, cli.format)?;
        }
        Commands::Levels { .. } => {
            let chart = InventoryLevelsChart::new(session.series(), outputs.reorder_point);
            match cli.format {
                OutputFormat::Table => println!("{}", render_levels_table(&chart)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
                OutputFormat::Csv => print!("{}", csv_string(&chart.points)?),
            }
        }
        Commands::ScenarioTemplate => {
            println!("{}", scenario.to_json()?);
        }
    }

    Ok(())
}

/// Defaults, then the scenario file, then flags; validated once at the end so a
/// flag can repair an out-of-range value in the file.
fn build_scenario(cli: &Cli, command: &Commands) -> Result<Scenario> {
    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed loading scenario: {}", path.display()))?,
        None => Scenario::default(),
    };
    cli.inputs.apply(&mut scenario.inputs);

    if let Commands::Levels {
        backorders,
        inventory_position,
        on_hand,
    } = command
    {
        override_series(&mut scenario.series, SeriesKind::Backorders, backorders)?;
        override_series(
            &mut scenario.series,
            SeriesKind::InventoryPosition,
            inventory_position,
        )?;
        override_series(&mut scenario.series, SeriesKind::OnHandInventory, on_hand)?;
    }

    scenario.validate().context("invalid scenario")?;
    Ok(scenario)
}

fn print_kpis(
    kpis: &[KpiTile],
    costs: &[KpiTile],
    outputs: &PolicyOutputs,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_tiles_table(kpis));
            println!("{}", render_tiles_table(costs));
            println!(
                "Q = {:.1} ({}), safety stock = {:.1}, efficiency = {:.1}, runway = {:.1} months",
                outputs.order_quantity,
                outputs.quantity_policy,
                outputs.safety_stock,
                outputs.efficiency_score,
                outputs.runway.runway_months,
            );
        }
        OutputFormat::Json => {
            let report = KpiReport {
                kpis,
                cost_tiles: costs,
                outputs,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => print!("{}", csv_string(kpis.iter().chain(costs))?),
    }
    Ok(())
}

fn print_charts(charts: &ChartSet, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_charts(charts));
            println!("{}", render_levels_table(&charts.inventory_levels));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(charts)?),
        OutputFormat::Csv => {
            for chart in charts.bar_charts() {
                println!("# {}", chart.title);
                print!("{}", csv_string(&chart.bars)?);
            }
            println!("# 4) What-if: Total Cost vs Q");
            print!("{}", csv_string(&charts.what_if)?);
        }
    }
    Ok(())
}

fn override_series(
    series: &mut InventorySeries,
    kind: SeriesKind,
    values: &Option<Vec<u32>>,
) -> Result<()> {
    let Some(values) = values else {
        return Ok(());
    };
    let points: [u32; 3] = values.as_slice().try_into().map_err(|_| {
        anyhow!(
            "{} needs exactly 3 comma-separated values, got {}",
            kind.label(),
            values.len()
        )
    })?;
    *series.values_mut(kind) = points;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use invilytics::error::InviError;
    use invilytics::policy::calculate;

    fn parse(args: &[&str]) -> (Cli, Commands) {
        let mut cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let command = cli
            .command
            .take()
            .unwrap_or(Commands::Kpis { export: None });
        (cli, command)
    }

    fn resolve(args: &[&str]) -> Result<Scenario> {
        let (cli, command) = parse(args);
        build_scenario(&cli, &command)
    }

    fn write_scenario(dir: &tempfile::TempDir, json: &str) -> String {
        let path = dir.path().join("scenario.json");
        fs::write(&path, json).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_no_flags_is_the_default_dashboard() {
        let scenario = resolve(&["invilytics"]).unwrap();
        assert_eq!(scenario, Scenario::default());

        let scenario = resolve(&["invilytics", "scenario-template"]).unwrap();
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn test_every_flag_maps_to_its_field() {
        let scenario = resolve(&[
            "invilytics",
            "--demand", "12000",
            "--order-cost", "75",
            "--holding-cost", "3.5",
            "--days-per-year", "360",
            "--lead-time", "14",
            "--daily-demand", "33",
            "--daily-std-dev", "9",
            "--service-level", "98",
            "--override", "true",
            "--manual-quantity", "900",
            "--budget", "3000",
            "--variation", "10",
            "kpis",
        ])
        .unwrap();

        let inputs = &scenario.inputs;
        assert_eq!(inputs.annual_demand, 12000.0);
        assert_eq!(inputs.order_cost, 75.0);
        assert_eq!(inputs.holding_cost_per_unit, 3.5);
        assert_eq!(inputs.days_per_year, 360);
        assert_eq!(inputs.lead_time_days, 14);
        assert_eq!(inputs.avg_daily_demand, 33.0);
        assert_eq!(inputs.std_dev_daily_demand, 9.0);
        assert_eq!(inputs.service_level_percent, 98.0);
        assert!(inputs.manual_override_enabled);
        assert_eq!(inputs.manual_quantity, 900.0);
        assert_eq!(inputs.annual_budget, 3000.0);
        assert_eq!(inputs.quantity_variation_percent, 10.0);
    }

    #[test]
    fn test_override_flag_switches_both_ways() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scenario(
            &dir,
            r#"{ "inputs": { "manual_override_enabled": true, "manual_quantity": 900.0 } }"#,
        );

        let from_file = resolve(&["invilytics", "--scenario", &path]).unwrap();
        let out = calculate(&from_file.inputs);
        assert_eq!(out.quantity_policy, "manual");
        assert_eq!(out.order_quantity, 900.0);

        let back_to_eoq = resolve(&[
            "invilytics", "--scenario", &path, "--override", "false", "--variation", "0",
        ])
        .unwrap();
        assert!(!back_to_eoq.inputs.manual_override_enabled);
        let out = calculate(&back_to_eoq.inputs);
        assert_eq!(out.quantity_policy, "eoq-variation");
        assert_eq!(out.order_quantity, out.eoq);

        let on = resolve(&["invilytics", "--override", "true"]).unwrap();
        assert!(on.inputs.manual_override_enabled);
    }

    #[test]
    fn test_override_requires_a_value() {
        assert!(Cli::try_parse_from(["invilytics", "--override", "maybe"]).is_err());
    }

    #[test]
    fn test_flags_win_over_the_scenario_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scenario(
            &dir,
            r#"{ "inputs": { "annual_demand": 5000.0, "order_cost": 40.0 } }"#,
        );

        let scenario = resolve(&["invilytics", "--scenario", &path, "--demand", "8000"]).unwrap();
        assert_eq!(scenario.inputs.annual_demand, 8000.0);
        assert_eq!(scenario.inputs.order_cost, 40.0);
        assert_eq!(scenario.inputs.holding_cost_per_unit, 2.0);
    }

    #[test]
    fn test_flag_repairs_out_of_range_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scenario(&dir, r#"{ "inputs": { "service_level_percent": 100.0 } }"#);

        let err = resolve(&["invilytics", "--scenario", &path]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InviError>(),
            Some(InviError::InvalidInput { field: "service_level_percent", .. })
        ));

        let scenario =
            resolve(&["invilytics", "--scenario", &path, "--service-level", "95"]).unwrap();
        assert_eq!(scenario.inputs.service_level_percent, 95.0);
    }

    #[test]
    fn test_out_of_range_flag_is_rejected() {
        let err = resolve(&["invilytics", "--variation", "90"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InviError>(),
            Some(InviError::InvalidInput { field: "quantity_variation_percent", .. })
        ));
    }

    #[test]
    fn test_misspelled_scenario_key_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scenario(&dir, r#"{ "inputs": { "anual_demand": 50000.0 } }"#);

        let err = resolve(&["invilytics", "--scenario", &path]).unwrap_err();
        assert!(matches!(err.downcast_ref::<InviError>(), Some(InviError::Json(_))));
    }

    #[test]
    fn test_levels_point_overrides() {
        let scenario = resolve(&[
            "invilytics",
            "levels",
            "--backorders", "1,2,3",
            "--on-hand", "200,100,250",
        ])
        .unwrap();

        assert_eq!(scenario.series.backorders, [1, 2, 3]);
        assert_eq!(scenario.series.on_hand, [200, 100, 250]);
        assert_eq!(scenario.series.inventory_position, [140, 80, 150]);
    }

    #[test]
    fn test_levels_rejects_wrong_point_count() {
        let err = resolve(&["invilytics", "levels", "--backorders", "1,2"]).unwrap_err();
        assert!(err.to_string().contains("exactly 3"));

        let mut series = InventorySeries::default();
        let err =
            override_series(&mut series, SeriesKind::OnHandInventory, &Some(vec![1, 2, 3, 4]))
                .unwrap_err();
        assert!(err.to_string().contains("got 4"));
        assert_eq!(series, InventorySeries::default());
    }

    #[test]
    fn test_levels_out_of_range_point_is_rejected() {
        let err = resolve(&["invilytics", "levels", "--backorders", "0,51,0"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InviError>(),
            Some(InviError::InvalidSeries { index: 1, value: 51, .. })
        ));
    }

    #[test]
    fn test_scenario_template_reflects_flags() {
        let (cli, command) = parse(&["invilytics", "--budget", "1234", "scenario-template"]);
        assert!(matches!(command, Commands::ScenarioTemplate));

        let scenario = build_scenario(&cli, &command).unwrap();
        let reparsed = Scenario::from_json(&scenario.to_json().unwrap()).unwrap();
        assert_eq!(reparsed.inputs.annual_budget, 1234.0);
        assert_eq!(reparsed.series, InventorySeries::default());
    }
}
