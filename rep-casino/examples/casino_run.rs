//! End-to-end casino run
//!
//! Runs a batch of replications, aggregates the persisted win rates, and
//! presents them three ways: free text, a table, and a PNG bar chart. A JSON
//! summary is exported alongside the chart.
//!
//! Run with: cargo run --package rep-casino --example casino_run

use rep_casino::channels::{casino_statistics, CasinoFrameLayout};
use rep_casino::simulate::{run, RunConfig};
use rep_core::logging::init_logging;
use rep_stats::{export_summary_json, FolderStatistics, StatisticsManager};
use rep_viz::charts::{create_bar_chart_with_config, ChartConfig};
use rep_viz::presenters::BufferPresenters;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let base_path = PathBuf::from("results/casino");
    let config = RunConfig {
        base_path: base_path.clone(),
        replications: 20,
        rounds_per_game: 100,
        seed: Some(42),
        ..RunConfig::default()
    };

    // Write phase: one folder per replication, one win rate per channel.
    run(&config)?;

    // Read phase: register the statistic and bind it to the results folder.
    let mut manager = StatisticsManager::new();
    manager.add(
        "CasinoStats",
        Box::new(casino_statistics(CasinoFrameLayout)),
    )?;

    let mut folder = FolderStatistics::new("Casino", &base_path, manager);
    folder.bind_base_path();

    {
        let stats = folder.manager_mut().get_mut("CasinoStats")?;
        let names: Vec<String> = (1..=config.replications)
            .map(|i| format!("{}{i}", config.prefix))
            .collect();
        stats.load_folders(&names)?;
    }
    folder.manager_mut().process("CasinoStats")?;

    // Presentation: fill the buffered views, then print and export them.
    let mut presenters = BufferPresenters::new();
    folder
        .manager()
        .setup_presenters("CasinoStats", Some(&mut presenters))?;

    for text in &presenters.texts {
        println!("{}\n", text.text);
    }
    for table in &presenters.tables {
        println!("{}\n", table.render());
    }
    for chart in &presenters.charts {
        let chart_config = ChartConfig::default().y_label("Win rate (%)");
        create_bar_chart_with_config(chart, "casino_win_rates.png", chart_config)?;
    }

    let summary = folder.manager().get("CasinoStats")?.summary();
    export_summary_json(&summary, "casino_summary.json", true)?;

    println!("chart:   casino_win_rates.png");
    println!("summary: casino_summary.json");
    Ok(())
}
