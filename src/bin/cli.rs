// src/bin/cli.rs
use boxstats::cli::{self, Mode};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    match cli::detect_mode() {
        Ok(Mode::Cli(params)) => cli::run(params).map_err(|e| color_eyre::eyre::eyre!("{e}")),
        Ok(Mode::Gui) => {
            eprintln!("No arguments given; use the `boxstats` binary for the GUI, or -h for help.");
            Ok(())
        }
        Err(e) => Err(color_eyre::eyre::eyre!("{e}")),
    }
}
