use indexed_sssp::io::{read_cases, render_json, render_path, render_reachability, TokenReader};
use indexed_sssp::runner::{run, ErrorPolicy, OutputMode, RunConfig, RunSummary};
use indexed_sssp::{Error, PathResult};
use ordered_float::OrderedFloat;

const TWO_CASES: &str = "4 4\n0 1 4\n0 2 1\n2 1 1\n1 3 1\n0 3\n2 0\n0 1\n";

fn run_to_string(config: &RunConfig, input: &str) -> (indexed_sssp::Result<RunSummary>, String) {
    let mut output = Vec::new();
    let summary = run(config, input.as_bytes(), &mut output);
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn test_token_reader() {
    let mut reader = TokenReader::new("  3\n-1\tx ");
    assert_eq!(reader.next_token::<usize>().unwrap(), Some(3));
    assert_eq!(reader.expect_token::<i64>("number").unwrap(), -1);
    assert!(matches!(reader.next_token::<usize>(), Err(Error::Parse(_))));
    assert_eq!(reader.next_token::<usize>().unwrap(), None);
    assert!(matches!(reader.expect_token::<usize>("number"), Err(Error::Parse(_))));
}

#[test]
fn test_read_cases() {
    let cases = read_cases(TWO_CASES);
    assert_eq!(cases.len(), 2);

    let first = cases[0].as_ref().unwrap();
    assert_eq!((first.start, first.end), (0, 3));
    assert_eq!(first.graph.neighbors(0), &[(1, OrderedFloat(4.0)), (2, OrderedFloat(1.0))]);

    let second = cases[1].as_ref().unwrap();
    assert!(second.graph.neighbors(0).is_empty());
    assert_eq!((second.start, second.end), (0, 1));
}

#[test]
fn test_read_cases_empty_input() {
    assert!(read_cases("").is_empty());
    assert!(read_cases(" \n\t").is_empty());
}

#[test]
fn test_invalid_case_does_not_hide_the_next_one() {
    let cases = read_cases(
        "2 1\n0 5 1\n0 1\n2 1\n0 1 3\n0 -1\n2 1\n0 1 -2\n0 1\n2 -1\n0 1\n2 1\n0 1 3\n0 1\n",
    );
    assert_eq!(cases.len(), 5);
    assert!(matches!(cases[0], Err(Error::InvalidGraph(_))));
    assert!(matches!(cases[1], Err(Error::InvalidGraph(_))));
    assert!(matches!(cases[2], Err(Error::InvalidGraph(_))));
    assert!(matches!(cases[3], Err(Error::InvalidGraph(_))));
    assert!(cases[4].is_ok());
}

#[test]
fn test_negative_edge_count_is_skippable() {
    let cases = read_cases("2 -1\n0 1\n2 0\n0 1\n");
    assert_eq!(cases.len(), 2);
    assert!(matches!(cases[0], Err(Error::InvalidGraph(_))));
    assert!(cases[1].is_ok());
}

#[test]
fn test_truncated_input_stops_reading() {
    let cases = read_cases("2 1\n0 1 3\n0 1\n3 2\n0 1");
    assert_eq!(cases.len(), 2);
    assert!(cases[0].is_ok());
    assert!(matches!(cases[1], Err(Error::Parse(_))));
}

#[test]
fn test_huge_edge_count_is_a_parse_error() {
    let cases = read_cases("2 1000000000000000000\n0 1 1\n");
    assert_eq!(cases.len(), 1);
    assert!(matches!(cases[0], Err(Error::Parse(_))));
}

#[test]
fn test_render() {
    let found = PathResult {
        source: 0,
        target: 3,
        distance: OrderedFloat(3.0),
        path: vec![0, 2, 1, 3],
    };
    let missing = PathResult {
        source: 0,
        target: 1,
        distance: OrderedFloat(f64::INFINITY),
        path: vec![],
    };

    assert_eq!(render_path(&found), "0 2 1 3");
    assert_eq!(render_path(&missing), "no path from 0 to 1");
    assert_eq!(render_reachability(true), "yes");
    assert_eq!(render_reachability(false), "no");

    let json: serde_json::Value = serde_json::from_str(&render_json(&found).unwrap()).unwrap();
    assert_eq!(json["distance"], 3.0);
    assert_eq!(json["path"], serde_json::json!([0, 2, 1, 3]));

    let json: serde_json::Value = serde_json::from_str(&render_json(&missing).unwrap()).unwrap();
    assert!(json["distance"].is_null());
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_run_path_mode() {
    let (summary, output) = run_to_string(&RunConfig::default(), TWO_CASES);
    assert_eq!(summary.unwrap(), RunSummary { solved: 2, skipped: 0 });
    assert_eq!(output, "0 2 1 3\nno path from 0 to 1\n");
}

#[test]
fn test_run_reachability_mode() {
    let config = RunConfig {
        mode: OutputMode::Reachability,
        ..Default::default()
    };
    let (summary, output) = run_to_string(&config, TWO_CASES);
    assert!(summary.is_ok());
    assert_eq!(output, "yes\nno\n");
}

#[test]
fn test_run_parallel_keeps_order() {
    let input = TWO_CASES.repeat(20);
    let sequential = run_to_string(&RunConfig::default(), &input).1;
    let config = RunConfig {
        parallel: true,
        ..Default::default()
    };
    let (summary, parallel) = run_to_string(&config, &input);

    assert_eq!(summary.unwrap().solved, 40);
    assert_eq!(parallel, sequential);
}

#[test]
fn test_run_error_policies() {
    let input = "2 0\n0 1\n2 0\n0 9\n1 0\n0 0\n";

    let (summary, output) = run_to_string(&RunConfig::default(), input);
    assert!(matches!(summary, Err(Error::InvalidGraph(_))));
    assert_eq!(output, "no path from 0 to 1\n");

    let config = RunConfig {
        on_error: ErrorPolicy::Skip,
        ..Default::default()
    };
    let (summary, output) = run_to_string(&config, input);
    assert_eq!(summary.unwrap(), RunSummary { solved: 2, skipped: 1 });
    assert_eq!(output, "no path from 0 to 1\n0\n");
}

#[test]
fn test_config_from_args() {
    let args = ["--mode", "json", "--skip-invalid", "--parallel"].map(String::from);
    let config = RunConfig::from_args(args).unwrap();
    assert_eq!(config.mode, OutputMode::Json);
    assert_eq!(config.on_error, ErrorPolicy::Skip);
    assert!(config.parallel);

    let default = RunConfig::from_args(Vec::new()).unwrap();
    assert_eq!(default.mode, OutputMode::Path);
    assert_eq!(default.on_error, ErrorPolicy::Abort);

    assert!(RunConfig::from_args(["--mode".to_string()]).is_err());
    assert!(RunConfig::from_args(["--mode", "fast"].map(String::from)).is_err());
    assert!(RunConfig::from_args(["--verbose".to_string()]).is_err());
}
