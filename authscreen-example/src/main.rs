use kv_log_macro as log;

use authscreen::{init_logging, AuthScreenConfig, LoggerKind, Result};
use authscreen_example::{replay, Script};

const USAGE: &str = "usage: authscreen-example <script.json> [config.json]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging(LoggerKind::Femme);

    let mut args = std::env::args().skip(1);
    let script_path = args.next().ok_or(USAGE)?;
    let config = match args.next() {
        Some(path) => AuthScreenConfig::from_file(path)?,
        None => AuthScreenConfig::default(),
    };

    let script = Script::from_file(&script_path)?;
    let report = replay(&script, config).await;

    for (event, outcome) in &report.handled {
        log::info!("{} -> {:?}", event, outcome);
    }

    log::info!("Replay finished", {
        title: report.final_view.title.as_str(),
        navigated: report.navigated(),
        alerts: report.alerts.len()
    });

    Ok(())
}
