use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("winplace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bring a window to the foreground and move/resize it")
        .long_about(
            "winplace finds a top-level window by its exact title, brings it to the \
             foreground and moves/resizes it to the given screen position and size. \
             Negative x/y values place the window on monitors left of or above the \
             primary one. Options are only recognised before the first argument.",
        )
        .override_usage("winplace [OPTIONS] <x> <y> <width> <height> <windowTitle>")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exit-code")
                .long("exit-code")
                .help(
                    "Exit non-zero when the window was not placed \
                     (2: invalid input, 3: window not found, 4: action failed)",
                )
                .action(ArgAction::SetTrue),
        )
        // Everything from the first positional on goes to the validator
        // untouched, dashes included, so the user gets its messages instead of
        // clap's.
        .arg(
            Arg::new("arguments")
                .help("x y width height windowTitle")
                .value_name("ARGS")
                .num_args(0..)
                .action(ArgAction::Append)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positional(matches: &clap::ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("arguments")
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_cli_build() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_cli_collects_five_positionals() {
        let matches = build_cli()
            .try_get_matches_from(["winplace", "100", "50", "800", "600", "Notepad"])
            .unwrap();
        assert_eq!(
            positional(&matches),
            vec!["100", "50", "800", "600", "Notepad"]
        );
        assert!(!matches.get_flag("verbose"));
        assert!(!matches.get_flag("json"));
        assert!(!matches.get_flag("exit-code"));
    }

    #[test]
    fn test_cli_accepts_negative_coordinates() {
        let matches = build_cli()
            .try_get_matches_from(["winplace", "-1920", "-8", "800", "600", "Notepad"])
            .unwrap();
        assert_eq!(
            positional(&matches),
            vec!["-1920", "-8", "800", "600", "Notepad"]
        );
    }

    #[test]
    fn test_cli_leaves_argument_count_to_validator() {
        let none = build_cli().try_get_matches_from(["winplace"]).unwrap();
        assert!(positional(&none).is_empty());

        let too_many = build_cli()
            .try_get_matches_from(["winplace", "1", "2", "3", "4", "5", "6"])
            .unwrap();
        assert_eq!(positional(&too_many).len(), 6);
    }

    #[test]
    fn test_cli_flags() {
        let matches = build_cli()
            .try_get_matches_from([
                "winplace",
                "-v",
                "--json",
                "--exit-code",
                "0",
                "0",
                "10",
                "10",
                "Title",
            ])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        assert!(matches.get_flag("json"));
        assert!(matches.get_flag("exit-code"));
        assert_eq!(positional(&matches).len(), 5);
    }

    #[test]
    fn test_cli_title_with_leading_dash_is_positional() {
        let matches = build_cli()
            .try_get_matches_from(["winplace", "0", "0", "10", "10", "-scratch-"])
            .unwrap();
        assert_eq!(positional(&matches), vec!["0", "0", "10", "10", "-scratch-"]);
    }

    #[test]
    fn test_cli_dash_leading_bad_number_reaches_validator() {
        let matches = build_cli()
            .try_get_matches_from(["winplace", "-x", "0", "10", "10", "T"])
            .unwrap();
        assert_eq!(positional(&matches), vec!["-x", "0", "10", "10", "T"]);
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_flags_after_first_positional_are_arguments() {
        let matches = build_cli()
            .try_get_matches_from(["winplace", "0", "0", "10", "10", "T", "--json"])
            .unwrap();
        assert!(!matches.get_flag("json"));
        assert_eq!(positional(&matches).len(), 6);
    }
}
