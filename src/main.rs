use anyhow::{Context, Result};
use clap::Parser;

use git_vtag::cli::{self, Cli};
use git_vtag::config;
use git_vtag::git::GitTagRepository;
use git_vtag::{logging, ui};

fn main() {
    let args = Cli::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<()> {
    let config =
        config::load_config(args.config.as_deref()).context("failed to load configuration")?;

    let path = cli::repository_path(args, &config);
    let mut repo = GitTagRepository::open(&path)?.with_style(cli::tag_style(args, &config));

    let report = cli::run(&mut repo, args)?;
    ui::display_report(&report);
    Ok(())
}
