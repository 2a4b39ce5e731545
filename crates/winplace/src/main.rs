use winplace_core::init_logging;

mod app;
mod commands;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet);

    let status = commands::run_command(&matches)?;

    if matches.get_flag("exit-code") && !status.is_success() {
        std::process::exit(status.exit_code());
    }

    Ok(())
}
