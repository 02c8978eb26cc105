mod api;
mod app;
mod card;
mod config;
mod error;
mod loader;
mod models;
mod page;
mod route;
mod router;
mod ui;

use crate::api::HttpVacancySource;
use crate::app::App;
use crate::config::Opts;
use crate::loader::VacancyLoader;
use crate::page::{Page, PageHandle};
use crate::router::Router;
use crate::ui::run_app;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::{fs::File, io, sync::Arc, sync::Mutex, time::Duration};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, fmt::layer, layer::SubscriberExt, registry, util::SubscriberInitExt,
};
use tui::{Terminal, backend::CrosstermBackend};

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let log_file = File::create(&opts.log_file)
        .with_context(|| format!("cannot open log file {}", opts.log_file.display()))?;
    let filter = EnvFilter::builder()
        .with_default_directive(opts.log.into())
        .from_env_lossy();
    registry()
        .with(filter)
        .with(layer().with_writer(Mutex::new(log_file)).with_ansi(false))
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("cannot start async runtime")?;

    let page = PageHandle::new(Page::default());
    let source = Arc::new(HttpVacancySource::new(opts.endpoint.clone()));
    info!(endpoint = source.url(), path = %opts.path, "starting vacancy board");

    let loader = Arc::new(VacancyLoader::new(source, page.clone()));
    let mut router = Router::new(page.clone(), loader, runtime.handle().clone(), opts.path.clone());
    router.ready();

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(200);
    let app = App::new(page, router);
    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(err) = res {
        error!("ui loop failed: {:?}", err);
        eprintln!("{:?}", err);
    }

    runtime.shutdown_timeout(Duration::from_millis(500));
    info!("stopped");

    Ok(())
}
