use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salary_core::{BreakdownCalculator, TaxRegime};
use salary_ui::app::SalaryApp;
use salary_ui::utils::{format_rupees, parse_amount};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Salary and take-home calculator for India's FY 2025-26 new tax regime.
///
/// Opens the desktop window by default. With `--ctc`, prints one breakdown
/// to the terminal and exits without opening a window.
#[derive(Debug, Parser)]
struct Cli {
    /// Annual cost to company in rupees (commas allowed, e.g. `12,00,000`).
    #[arg(long)]
    ctc: Option<String>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep terminal output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if let Some(raw) = cli.ctc.as_deref() {
        return run_headless(raw);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([650.0, 650.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "India Salary & Tax Calculator (FY 2025-26 New Regime)",
        options,
        Box::new(|cc| Ok(Box::new(SalaryApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("window session failed: {e}"))
}

/// Computes and prints one breakdown without opening a window.
fn run_headless(raw: &str) -> anyhow::Result<()> {
    let ctc = parse_amount(raw)?;
    anyhow::ensure!(
        ctc > Decimal::ZERO,
        "annual CTC must be a positive number, got '{raw}'"
    );

    let regime = TaxRegime::fy_2025_26();
    let breakdown = BreakdownCalculator::new(&regime).calculate(ctc)?;

    info!("--- Annual Breakdown (FY 2025-26, New Regime) ---");
    for (label, amount) in breakdown.annual_rows() {
        info!("{label}: {}", format_rupees(amount));
    }
    info!("--- Monthly Breakdown ---");
    for (label, amount) in breakdown.monthly_rows() {
        info!("{label}: {}", format_rupees(amount));
    }

    Ok(())
}
