use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use winplace_core::report::{self, ActionReport, RejectionReport};
use winplace_core::window::validate_arguments;
use winplace_core::{WindowActionStatus, default_backend, events, window_ops};

/// Run validation, placement and reporting; returns the run's status.
pub fn run_command(matches: &ArgMatches) -> Result<WindowActionStatus, Box<dyn std::error::Error>> {
    events::log_app_startup();

    let json_output = matches.get_flag("json");
    let args: Vec<String> = matches
        .get_many::<String>("arguments")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    info!(
        event = "cli.place_started",
        argument_count = args.len(),
        json_output = json_output
    );

    let query = match validate_arguments(&args) {
        Ok(query) => query,
        Err(e) => {
            events::log_input_rejected(&e);
            if json_output {
                print_json(&RejectionReport::new(&e))?;
            } else {
                println!("{}", e);
            }
            return Ok(WindowActionStatus::InvalidInput);
        }
    };

    let backend = default_backend();
    let outcome = window_ops::move_and_resize(&backend, &query);

    if json_output {
        print_json(&ActionReport::new(&outcome, query.title()))?;
    } else {
        if let Some(rect) = outcome.previous_bounds() {
            println!("{}", report::bounds_message(&rect));
        }
        report::report(outcome.status(), query.title());
    }

    info!(
        event = "cli.place_completed",
        status = %outcome.status(),
        title = query.title()
    );
    Ok(outcome.status())
}

/// Pretty-print `value` as JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            error!(event = "cli.json_output_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
