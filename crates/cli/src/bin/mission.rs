use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, NaiveTime, Utc};
use clap::Parser;
use intercept_calculator::config::load_mission_plans;
use intercept_calculator::engine::mission::windows;
use intercept_calculator::engine::{
    MissionOutcome, MissionParameters, PRESET_WINDOWS, PropulsionType, compute,
    parse_launch_date, plan,
};
use intercept_calculator::history::MissionLog;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(author, version, about = "Plan an intercept mission against 3I/ATLAS")]
struct Cli {
    /// Propulsion type: chemical, ion, nuclear or solar
    #[arg(long, default_value = "ion")]
    propulsion: PropulsionType,

    /// Payload mass in kg (500-5000)
    #[arg(long, default_value_t = 1500.0)]
    payload: f64,

    /// Launch on a preset window (label or YYYY-MM-DD)
    #[arg(long, conflicts_with = "launch")]
    window: Option<String>,

    /// Launch on an arbitrary date (YYYY-MM-DD or RFC 3339); defaults to today
    #[arg(long)]
    launch: Option<String>,

    /// Run every mission in a YAML/TOML plan file or directory instead of the flags above
    #[arg(long, conflicts_with_all = ["window", "launch"])]
    plan: Option<PathBuf>,

    /// Seed for reproducible anytime launches
    #[arg(long)]
    seed: Option<u64>,

    /// Mission history file
    #[arg(long, default_value = "data/mission_history.json")]
    history: PathBuf,

    /// Do not append results to the mission history
    #[arg(long, default_value_t = false)]
    no_save: bool,

    /// Simulated calculation delay before results are shown
    #[arg(long, default_value_t = 0)]
    latency_ms: u64,

    /// Print the preset windows with estimates for the chosen propulsion and payload
    #[arg(long, default_value_t = false)]
    list_windows: bool,
}

struct Request {
    name: Option<String>,
    params: MissionParameters,
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.list_windows {
        print_windows(cli.propulsion, cli.payload)?;
        return Ok(());
    }

    let requests = build_requests(&cli)?;
    let mut history = if cli.no_save {
        None
    } else {
        Some(MissionLog::load(&cli.history)?)
    };

    for request in requests {
        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let outcome = compute(&request.params, &mut rng)?;

        if cli.latency_ms > 0 {
            log::info!("calculating trajectory...");
            thread::sleep(Duration::from_millis(cli.latency_ms));
        }

        let name = match (&request.name, &history) {
            (Some(name), _) => name.clone(),
            (None, Some(store)) => store.next_mission_name(),
            (None, None) => "Mission".to_string(),
        };
        print_outcome(&name, &outcome);

        if let Some(store) = history.as_mut() {
            let id = store.append(name, outcome, Utc::now());
            log::info!("recorded mission {} in {}", id, cli.history.display());
        }
    }

    if let Some(store) = &history {
        store.save(&cli.history)?;
    }

    Ok(())
}

fn build_requests(cli: &Cli) -> anyhow::Result<Vec<Request>> {
    if let Some(path) = &cli.plan {
        return load_mission_plans(path)?
            .iter()
            .map(|config| -> anyhow::Result<Request> {
                Ok(Request {
                    name: config.name.clone(),
                    params: plan::from_config(config)?,
                    seed: config.seed.or(cli.seed),
                })
            })
            .collect();
    }

    let params = if let Some(key) = &cli.window {
        MissionParameters::best_interception(cli.propulsion, cli.payload, *windows::lookup(key)?)
    } else {
        let launch_date = match &cli.launch {
            Some(raw) => parse_launch_date(raw)?,
            None => today_midnight(),
        };
        MissionParameters::anytime(cli.propulsion, cli.payload, launch_date)
    };

    Ok(vec![Request {
        name: None,
        params,
        seed: cli.seed,
    }])
}

fn today_midnight() -> DateTime<Utc> {
    Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn print_windows(propulsion: PropulsionType, payload: f64) -> anyhow::Result<()> {
    for window in &PRESET_WINDOWS {
        MissionParameters::best_interception(propulsion, payload, *window).validate()?;
    }
    println!("=== Preset intercept windows ({propulsion}, {payload} kg) ===");
    for window in &PRESET_WINDOWS {
        let estimate = window.estimate(propulsion, payload);
        println!(
            "{:<16} {}  ~{} days, ΔV {:.2} km/s, fuel {} kg",
            window.label,
            window.date,
            estimate.travel_time_days,
            estimate.delta_v_km_s,
            estimate.fuel_required_kg
        );
    }
    Ok(())
}

fn print_outcome(name: &str, outcome: &MissionOutcome) {
    let profile = outcome.propulsion.profile();
    println!("=== {name}: {} ===", outcome.status_label());
    println!("Mode          : {}", outcome.mode.as_str());
    println!(
        "Propulsion    : {} (max ΔV {} km/s)",
        profile.name, profile.max_delta_v_km_s
    );
    println!("Payload       : {} kg", outcome.payload_mass_kg);
    println!("Launch        : {}", outcome.launch_date.format("%Y-%m-%d"));
    println!("Arrival       : {}", outcome.arrival_date.format("%Y-%m-%d"));
    println!("Travel time   : {} days", outcome.travel_time_days);
    println!("ΔV            : {} km/s", outcome.delta_v_display());
    println!("Fuel required : {} kg", outcome.fuel_required_kg);
    println!("{}", outcome.explanation);
    println!("{}", outcome.educational_note);
}
