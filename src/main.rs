//! Gobang GUI and headless self-play

use clap::Parser;
use gobang::cli::Cli;
use gobang::game::{ConsolePresentation, TurnController};
use gobang::ui::GobangApp;
use gobang::Side;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    if cli.headless {
        let mut game = TurnController::new(config, ConsolePresentation::new(cli.games));
        game.start();

        let console = game.presentation();
        info!(
            games = console.results().len(),
            black = console.wins(Side::Black),
            white = console.wins(Side::White),
            "self-play finished"
        );
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(move |cc| Ok(Box::new(GobangApp::new(cc, config)))),
    )
}
