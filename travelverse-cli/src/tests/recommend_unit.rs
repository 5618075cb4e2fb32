//! Focused unit tests covering recommend configuration and execution.

use super::helpers::{recommend_request, scratch_root, write_json_file, write_utf8};
use super::*;
use crate::recommend::{
    RecommendArgs, RecommendConfig, config_from_layers_for_test, run_recommend_with,
};
use rstest::rstest;
use serde_json::{Value, json};
use travelverse_scorer::RecommendationError;

fn args_for(path: &camino::Utf8Path) -> RecommendArgs {
    RecommendArgs {
        request_path: Some(path.to_path_buf()),
        seed: Some(42),
        limit: None,
    }
}

fn run_to_json(args: RecommendArgs) -> Value {
    let mut buffer = Vec::new();
    run_recommend_with(args, &mut buffer).expect("recommend should succeed");
    serde_json::from_slice(&buffer).expect("output should be JSON")
}

#[rstest]
fn converting_without_request_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RECOMMEND_REQUEST);
            assert_eq!(env, ENV_RECOMMEND_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn config_defaults_limit_to_five() {
    let config = RecommendConfig::try_from(RecommendArgs {
        request_path: Some("req.json".into()),
        ..RecommendArgs::default()
    })
    .expect("config should build");
    assert_eq!(config.recommendation.limit, 5);
    assert_eq!(config.seed, None);
}

#[rstest]
fn zero_limit_is_rejected() {
    let err = RecommendConfig::try_from(RecommendArgs {
        request_path: Some("req.json".into()),
        limit: Some(0),
        ..RecommendArgs::default()
    })
    .expect_err("zero limit should error");
    match err {
        CliError::InvalidArgument { field, .. } => assert_eq!(field, ARG_RECOMMEND_LIMIT),
        other => panic!("expected InvalidArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let (_tmp, root) = scratch_root();
    let config = RecommendConfig::try_from(args_for(&root.join("absent.json")))
        .expect("config should build");
    let err = config.validate_sources().expect_err("missing file");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RECOMMEND_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_directories() {
    let (_tmp, root) = scratch_root();
    let request_path = root.join("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let config = RecommendConfig::try_from(args_for(&request_path)).expect("config should build");
    let err = config.validate_sources().expect_err("directory path");
    match err {
        CliError::SourcePathNotFile { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn prints_ranked_recommendations() {
    let (_tmp, root) = scratch_root();
    let path = write_json_file(&root, "request.json", &recommend_request());
    let output = run_to_json(args_for(&path));

    let recommendations = output["recommendations"].as_array().expect("array");
    assert_eq!(recommendations.len(), 3);
    let scores: Vec<f64> = recommendations
        .iter()
        .map(|entry| entry["score"].as_f64().expect("score"))
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(
        output["insights"]["timingRecommendation"],
        "Booking 2-3 months in advance usually secures the best prices"
    );
}

#[rstest]
fn limit_truncates_output() {
    let (_tmp, root) = scratch_root();
    let path = write_json_file(&root, "request.json", &recommend_request());
    let output = run_to_json(RecommendArgs {
        limit: Some(2),
        ..args_for(&path)
    });
    assert_eq!(output["recommendations"].as_array().map(Vec::len), Some(2));
}

#[rstest]
fn equal_seeds_print_identical_output() {
    let (_tmp, root) = scratch_root();
    let path = write_json_file(&root, "request.json", &recommend_request());
    let mut first = Vec::new();
    let mut second = Vec::new();
    run_recommend_with(args_for(&path), &mut first).expect("first run");
    run_recommend_with(args_for(&path), &mut second).expect("second run");
    assert_eq!(first, second);
}

#[rstest]
fn invalid_json_reports_parse_error() {
    let (_tmp, root) = scratch_root();
    let path = root.join("request.json");
    write_utf8(&path, b"{ not valid json");
    let err = run_recommend_with(args_for(&path), &mut Vec::new()).expect_err("bad json");
    match err {
        CliError::ParseInput { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn unknown_travel_style_reports_profile_error() {
    let (_tmp, root) = scratch_root();
    let mut request = recommend_request();
    request["profile"]["travelStyle"] = json!("space-tourism");
    let path = write_json_file(&root, "request.json", &request);
    let err = run_recommend_with(args_for(&path), &mut Vec::new()).expect_err("bad profile");
    match err {
        CliError::Recommend(RecommendationError::InvalidProfile(_)) => {}
        other => panic!("expected InvalidProfile, found {other:?}"),
    }
}

#[rstest]
fn empty_destination_list_is_an_error() {
    let (_tmp, root) = scratch_root();
    let mut request = recommend_request();
    request["destinations"] = json!([]);
    let path = write_json_file(&root, "request.json", &request);
    let err = run_recommend_with(args_for(&path), &mut Vec::new()).expect_err("no candidates");
    match err {
        CliError::Recommend(RecommendationError::EmptyCandidateSet) => {}
        other => panic!("expected EmptyCandidateSet, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));
    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "request_path": "from-file.json", "limit": 3, "seed": 1 }), None);
    composer.push_environment(json!({ "request_path": "from-env.json", "limit": 4 }));
    composer.push_cli(json!({ "limit": 2 }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.request_path, "from-env.json");
    assert_eq!(config.recommendation.limit, 2);
    assert_eq!(config.seed, Some(1));
}
