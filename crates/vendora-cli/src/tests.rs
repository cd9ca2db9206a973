use super::*;
use vendora_core::MatchingConfig;

#[test]
fn parses_migrate_command() {
    let cli = Cli::try_parse_from(["vendora-cli", "migrate"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Migrate));
}

#[test]
fn parses_seed_command_with_file() {
    let cli = Cli::try_parse_from(["vendora-cli", "seed", "--file", "config/vendors.yaml"])
        .expect("expected valid cli args");
    match cli.command {
        Commands::Seed { file } => assert_eq!(file, PathBuf::from("config/vendors.yaml")),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn seed_requires_file() {
    assert!(Cli::try_parse_from(["vendora-cli", "seed"]).is_err());
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["vendora-cli"]).is_err());
}

fn parse_search(args: &[&str]) -> SearchArgs {
    let mut argv = vec!["vendora-cli", "search"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).expect("expected valid cli args").command {
        Commands::Search(args) => args,
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_search_with_location_and_sort() {
    let args = parse_search(&[
        "--catalog",
        "config/vendors.yaml",
        "--query",
        "photographer",
        "--lat",
        "22.7533",
        "--lon",
        "75.8937",
        "--sort",
        "budget-asc",
    ]);
    assert_eq!(args.catalog, Some(PathBuf::from("config/vendors.yaml")));
    assert_eq!(args.query.as_deref(), Some("photographer"));
    assert_eq!(args.sort, SortMode::BudgetAsc);
    assert_eq!(args.page, 1);
}

#[test]
fn search_accepts_negative_coordinates() {
    let args = parse_search(&["--lat", "-33.8688", "--lon", "151.2093"]);
    assert_eq!(args.lat, Some(-33.8688));
}

#[test]
fn search_rejects_lat_without_lon() {
    let mut argv = vec!["vendora-cli", "search", "--lat", "22.7"];
    argv.push("--query");
    argv.push("dj");
    assert!(Cli::try_parse_from(argv).is_err());
}

#[test]
fn search_rejects_unknown_sort() {
    assert!(Cli::try_parse_from(["vendora-cli", "search", "--sort", "cheapest"]).is_err());
}

#[test]
fn build_request_applies_matching_defaults() {
    let args = parse_search(&["--query", "dj", "--city", "Indore"]);
    let matching = MatchingConfig::default();
    let request = search::build_request(&args, &matching).expect("request");

    assert!((request.radius_km - matching.thresholds.default_radius_km).abs() < f64::EPSILON);
    assert_eq!(request.page_size, matching.thresholds.default_page_size);
    assert_eq!(request.city.as_deref(), Some("Indore"));
    assert!(request.location.is_none());
}

#[test]
fn build_request_rejects_out_of_range_coordinate() {
    let args = parse_search(&["--lat", "95", "--lon", "75"]);
    assert!(search::build_request(&args, &MatchingConfig::default()).is_err());
}
