use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use intercept_calculator::diary::{self, DiaryQuery, StatusFilter};
use intercept_calculator::export::{self, assist, diary as diary_export};
use intercept_calculator::history::MissionLog;

#[derive(Parser)]
#[command(author, version, about = "Browse, summarize and export the mission diary")]
struct Cli {
    /// Mission history file
    #[arg(long, default_value = "data/mission_history.json")]
    history: PathBuf,

    /// Show only successful or failed missions
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    filter: FilterArg,

    /// Case-insensitive search over name, propulsion and mode
    #[arg(long)]
    search: Option<String>,

    /// Print aggregate statistics
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Write the filtered diary as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a plain-text summary of the filtered diary (`-` for stdout)
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Print the detailed report for one mission id
    #[arg(long)]
    report: Option<u64>,

    /// Print the mission-history JSON handed to the chat assistant
    #[arg(long, default_value_t = false)]
    assist_context: bool,

    /// Remove every mission from the history
    #[arg(long, default_value_t = false)]
    clear: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum FilterArg {
    All,
    Success,
    Failure,
}

impl From<FilterArg> for StatusFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => StatusFilter::All,
            FilterArg::Success => StatusFilter::Success,
            FilterArg::Failure => StatusFilter::Failure,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let mut store = MissionLog::load(&cli.history)?;

    if cli.clear {
        let removed = store.len();
        store.clear();
        store.save(&cli.history)?;
        log::info!("cleared {removed} missions from {}", cli.history.display());
        return Ok(());
    }

    if let Some(id) = cli.report {
        let record = store
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("mission {id} not found in diary"))?;
        let mut out = std::io::stdout().lock();
        diary_export::write_mission_report(&mut out, &record.export_row())?;
        return Ok(());
    }

    let query = DiaryQuery {
        status: cli.filter.into(),
        search: cli.search.clone(),
    };
    let selected = diary::newest_first(&diary::filter(store.records(), &query));

    if cli.assist_context {
        let entries: Vec<_> = selected.iter().map(|r| r.assist_entry()).collect();
        println!("{}", assist::mission_context_json(&entries)?);
        return Ok(());
    }

    let rows: Vec<_> = selected.iter().map(|r| r.export_row()).collect();
    let mut exported = false;
    if let Some(path) = &cli.csv {
        let mut writer = export::writer_for_path(path)?;
        diary_export::write_summary_csv(&mut *writer, &rows)?;
        writer.flush()?;
        exported = true;
    }
    if let Some(path) = &cli.summary {
        let mut writer = export::writer_for_path(path)?;
        diary_export::write_summary_text(&mut *writer, &rows)?;
        writer.flush()?;
        exported = true;
    }

    if cli.stats {
        let stats = diary::stats(store.records());
        println!("=== Mission Diary ===");
        println!("Total missions : {}", stats.total);
        println!("Success rate   : {}%", stats.success_rate_percent);
        println!("Average ΔV     : {:.1} km/s", stats.average_delta_v_km_s);
        match stats.best {
            Some(best) => println!(
                "Best mission   : {} ({} km/s)",
                best.name,
                best.data.delta_v_display()
            ),
            None => println!("Best mission   : none yet"),
        }
    } else if !exported {
        if selected.is_empty() {
            println!("No missions recorded.");
        }
        for record in &selected {
            println!(
                "#{:<4} {:<14} {:<8} {:<18} {:<9} {:>4} days  ΔV {} km/s  fuel {} kg",
                record.id,
                record.name,
                record.data.status_label(),
                record.data.mode.as_str(),
                record.data.propulsion.as_str(),
                record.data.travel_time_days,
                record.data.delta_v_display(),
                record.data.fuel_required_kg
            );
        }
    }

    Ok(())
}
