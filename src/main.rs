mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use log::{info, warn};

use config::Settings;
use data::loader::load_file;
use state::Dashboard;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();

    // The whole pipeline runs before any listener exists: a missing table
    // stops the process here.
    let table = load_file(&settings.data_path).context("cannot build the dashboard")?;
    if table.is_empty() {
        warn!("{} has no data rows", settings.data_path.display());
    } else if let Some((first, last)) = table.year_span() {
        info!(
            "loaded {} rows for {} countries ({first}–{last})",
            table.len(),
            table.countries.len()
        );
    }

    let dashboard = Dashboard::build(&table);
    info!(
        "classified {} rows, ranked {} countries",
        dashboard.classified.len(),
        dashboard.top.len()
    );
    let page = dashboard.render_page();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(app::serve(settings.bind_addr(), page))
}
