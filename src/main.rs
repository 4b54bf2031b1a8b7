mod db;
mod dock;
mod paths;
mod prefs;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use crate::db::WallpaperDb;
use crate::prefs::Pref;

/// Wallset main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preference assignments as KEY=VALUE pairs, where KEY names a
    /// display or desktop slot and VALUE is the image path to show there.
    /// With no assignments every stored preference is cleared.
    #[arg(value_name = "KEY=VALUE", value_parser = prefs::parse_assignment)]
    assignments: Vec<Pref>,

    /// Update the database without restarting the Dock
    #[arg(long)]
    no_refresh: bool,

    /// Activate debug mode
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let db_path = paths::db_path().context("cannot open wallpaper database")?;
    if cli.debug {
        eprintln!("Using wallpaper database at {}", db_path.display());
    }

    let cwd = std::env::current_dir().context("getting current directory")?;
    let mut prefs = prefs::collect(cli.assignments.clone());
    for value in prefs.values_mut() {
        let absolute = prefs::absolutize(value, &cwd);
        *value = absolute;
    }

    let mut db = WallpaperDb::open(&db_path)?;
    db.replace_prefs(&prefs)
        .context("error updating wallpaper database")?;

    if prefs.is_empty() {
        println!("Cleared all wallpaper preferences");
    } else {
        for (key, value) in &prefs {
            println!("Set wallpaper for {} to {}", key.cyan(), value.green());
        }
    }

    if cli.no_refresh {
        if cli.debug {
            eprintln!("Skipping Dock restart");
        }
        return Ok(());
    }

    if let Err(e) = dock::restart() {
        eprintln!("Failed to restart the Dock: {}", e);
        eprintln!("The new wallpaper will be applied on your next login");
    }

    Ok(())
}
