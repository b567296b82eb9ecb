//! Full pipeline: simulate, persist, discover, aggregate, present.

use rep_casino::channels::{casino_statistics, CasinoFrameLayout, CasinoLineLayout, CHANNEL_COUNT};
use rep_casino::simulate::{run, simulate_casino, RunConfig};
use rep_stats::{Statistics, StatisticsManager};
use rep_store::OutputManager;
use rep_viz::presenters::BufferPresenters;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn test_config(base: &std::path::Path) -> RunConfig {
    RunConfig {
        base_path: base.to_path_buf(),
        replications: 5,
        rounds_per_game: 50,
        seed: Some(1234),
        ..RunConfig::default()
    }
}

#[test]
fn simulated_run_round_trips_through_binary_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    run(&config).unwrap();

    // Five replication folders, named Replication1..Replication5.
    for i in 1..=config.replications {
        assert!(dir.path().join(format!("Replication{i}")).is_dir());
    }

    let mut stats = casino_statistics(CasinoFrameLayout);
    stats.set_base_path(dir.path());
    stats.input_manager_mut().load_replications().unwrap();
    stats.process_all_replications().unwrap();

    for channel in 0..CHANNEL_COUNT {
        assert_eq!(stats.sample_count(channel), config.replications);
        assert!((0.0..=1.0).contains(&stats.mean(channel)));
    }

    // The aggregated values must equal a fresh simulation from the same seed.
    let mut rng = StdRng::seed_from_u64(1234);
    let mut expected = vec![Vec::new(); CHANNEL_COUNT];
    for _ in 0..config.replications {
        let rates = simulate_casino(config.rounds_per_game, &mut rng);
        for (channel, rate) in rates.into_iter().enumerate() {
            expected[channel].push(rate);
        }
    }
    for channel in 0..CHANNEL_COUNT {
        let mean = expected[channel].iter().sum::<f64>() / expected[channel].len() as f64;
        assert!((stats.mean(channel) - mean).abs() < 1e-12);
    }
}

#[test]
fn text_layout_preserves_rates_to_two_decimals() {
    let dir = tempfile::tempdir().unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let rates = simulate_casino(100, &mut rng);

    let mut output = OutputManager::new(dir.path(), CasinoLineLayout);
    output.new_replication().unwrap();
    for (i, rate) in rates.iter().enumerate() {
        output.writer_mut(i).unwrap().write(rate).unwrap();
    }
    output.close_all_writers();

    let mut stats = casino_statistics(CasinoLineLayout);
    stats.set_base_path(dir.path());
    stats.input_manager_mut().load_replications().unwrap();
    stats.process_all_replications().unwrap();

    for (channel, rate) in rates.iter().enumerate() {
        assert!((stats.mean(channel) - rate).abs() <= 0.005);
    }
}

#[test]
fn presenters_show_percentages_on_a_percent_scale() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    run(&config).unwrap();

    let mut manager = StatisticsManager::new();
    let mut stats = casino_statistics(CasinoFrameLayout);
    stats.set_base_path(dir.path());
    stats.input_manager_mut().load_replications().unwrap();
    manager.add("casino", Box::new(stats)).unwrap();
    manager.process("casino").unwrap();

    let mut presenters = BufferPresenters::new();
    manager
        .setup_presenters("casino", Some(&mut presenters))
        .unwrap();

    assert_eq!(presenters.charts.len(), 1);
    let chart = &presenters.charts[0];
    assert_eq!(chart.title, "Casino Game Win Rates");
    assert_eq!(chart.scale, (0.0, 100.0));
    assert_eq!(chart.labels.len(), CHANNEL_COUNT);
    assert!(chart.data.iter().all(|&v| (0.0..=100.0).contains(&v)));

    let text = &presenters.texts[0].text;
    assert!(text.contains("Roulette AR"));
    assert!(text.contains('%'));

    // Header row plus one row per channel.
    assert_eq!(presenters.tables[0].rows.len(), CHANNEL_COUNT + 1);
}

#[test]
fn summary_reports_every_channel() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    run(&config).unwrap();

    let mut stats = casino_statistics(CasinoFrameLayout);
    stats.set_base_path(dir.path());
    stats.input_manager_mut().load_replications().unwrap();
    stats.process_all_replications().unwrap();

    let summary = stats.summary();
    assert_eq!(summary.title, "Casino Game Win Rates");
    assert_eq!(summary.channels.len(), CHANNEL_COUNT);
    for channel in &summary.channels {
        assert_eq!(channel.samples, config.replications);
    }
}
