mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use infra_risk_map::config::init_app_config;
use infra_risk_map::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config();
    let debug = std::env::var("DEBUG").is_ok();

    // Not a terminal (or asked not to draw one): print the list and exit
    if args.headless || !is_terminal() {
        logging::init_stderr_logging(debug);
        return event::run_headless(&args, &config).await;
    }

    if let Err(e) = logging::init_file_logging(&config.log_file, debug) {
        eprintln!(
            "Could not open log file {}: {e}",
            config.log_file.display()
        );
    }

    let source = args.search_source(&config)?;
    let mut app = App::new(&config, source);
    app.set_initial_view(args.view_state());
    if args.search_on_start() {
        app.submit_search();
    }

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
