mod app;
mod cli;
mod config;
mod consts;
mod core;
mod data;
mod error;
mod output;
mod utils;

use chrono::Local;
use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    // Keep stderr clean when the output is meant for another program
    let config = if cli.machine_output() {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    let today = Local::now().date_naive();
    if let Err(e) = app::run(&cli, today) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
