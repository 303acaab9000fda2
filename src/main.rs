use std::process::ExitCode;

use anyhow::Context;
use champion_icons::{logging, Config, KeyList, UReqFetcher};

fn main() -> ExitCode {
    logging::init_logging();

    match download_icons() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn download_icons() -> anyhow::Result<()> {
    let config = Config::new().context("parsing the default icon base URL")?;

    let keys = KeyList::load(config.keys_file()).context("loading champion keys")?;

    champion_icons::run(&config, keys, &UReqFetcher::new()).context("downloading champion icons")?;

    Ok(())
}
