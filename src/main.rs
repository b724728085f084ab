use anyhow::{bail, Result};
use log::info;

use cpto_demo::Report;

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The only supported flag switches the output to a JSON report.
    let mut json_output = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            other => bail!("Unknown argument: {other}"),
        }
    }

    info!("Building demo report");
    let report = Report::build();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
