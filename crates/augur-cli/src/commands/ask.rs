//! One-shot divination from the command line.

use colored::Colorize;

use augur_engine::{DivinationService, EngineConfig, Request};

/// Dispatch a single question and print the reading.
pub fn run(
    question: &str,
    user: &str,
    privileged: bool,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let service = DivinationService::new(config);

    let request = Request::from_player(user, privileged, question);
    let result = service.dispatch(&request).map_err(|e| e.to_string());
    service.shutdown();
    let divination = result?;

    if json {
        let out = serde_json::to_string_pretty(&divination).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        let [echo, reading] = divination.lines();
        println!("{echo}");
        println!("{}", reading.bold());
    }

    Ok(())
}
