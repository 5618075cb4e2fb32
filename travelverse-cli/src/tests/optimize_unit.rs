//! Unit tests for the optimize command.

use super::helpers::{optimize_request, scratch_root, write_json_file};
use super::*;
use crate::optimize::{OptimizeArgs, OptimizeConfig, config_from_layers_for_test, run_optimize_with};
use rstest::rstest;
use serde_json::{Value, json};
use travelverse_core::OptimizeError;

fn args_for(path: &camino::Utf8Path) -> OptimizeArgs {
    OptimizeArgs {
        request_path: Some(path.to_path_buf()),
        seed: Some(9),
        ..OptimizeArgs::default()
    }
}

#[rstest]
fn converting_without_request_errors() {
    let err = OptimizeConfig::try_from(OptimizeArgs::default()).expect_err("missing request");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_OPTIMIZE_REQUEST);
            assert_eq!(env, ENV_OPTIMIZE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn config_applies_swarm_defaults() {
    let config = OptimizeConfig::try_from(OptimizeArgs {
        request_path: Some("group.json".into()),
        alternatives: Some(5),
        ..OptimizeArgs::default()
    })
    .expect("config should build");
    assert_eq!(config.swarm.iterations, 50);
    assert_eq!(config.swarm.alternative_count, 5);
}

#[rstest]
fn prints_optimisation_result() {
    let (_tmp, root) = scratch_root();
    let path = write_json_file(&root, "group.json", &optimize_request());
    let mut buffer = Vec::new();
    run_optimize_with(
        OptimizeArgs {
            iterations: Some(5),
            alternatives: Some(2),
            ..args_for(&path)
        },
        &mut buffer,
    )
    .expect("optimize should succeed");

    let output: Value = serde_json::from_slice(&buffer).expect("JSON output");
    assert_eq!(output["destinationId"], "1");
    assert_eq!(output["participantCount"], 3);
    assert_eq!(output["iterations"], 5);
    assert_eq!(output["alternatives"].as_array().map(Vec::len), Some(2));
}

#[rstest]
fn equal_seeds_print_identical_output() {
    let (_tmp, root) = scratch_root();
    let path = write_json_file(&root, "group.json", &optimize_request());
    let mut first = Vec::new();
    let mut second = Vec::new();
    run_optimize_with(args_for(&path), &mut first).expect("first run");
    run_optimize_with(args_for(&path), &mut second).expect("second run");
    assert_eq!(first, second);
}

#[rstest]
#[case::no_participants(json!({ "destinationId": "1", "participants": [] }), OptimizeError::NoParticipants)]
#[case::bad_position(
    json!({ "destinationId": "1", "participants": [{ "lat": 95.0, "lng": 0.0 }] }),
    OptimizeError::InvalidCoordinate { index: 0 }
)]
fn invalid_requests_surface_optimiser_errors(#[case] request: Value, #[case] expected: OptimizeError) {
    let (_tmp, root) = scratch_root();
    let path = write_json_file(&root, "group.json", &request);
    let err = run_optimize_with(args_for(&path), &mut Vec::new()).expect_err("invalid request");
    match err {
        CliError::Optimize(source) => assert_eq!(source, expected),
        other => panic!("expected Optimize error, found {other:?}"),
    }
}

#[rstest]
fn zero_iterations_are_rejected() {
    let (_tmp, root) = scratch_root();
    let path = write_json_file(&root, "group.json", &optimize_request());
    let err = run_optimize_with(
        OptimizeArgs {
            iterations: Some(0),
            ..args_for(&path)
        },
        &mut Vec::new(),
    )
    .expect_err("zero iterations");
    match err {
        CliError::Optimize(OptimizeError::ZeroIterations) => {}
        other => panic!("expected ZeroIterations, found {other:?}"),
    }
}

#[rstest]
fn file_layer_sets_iterations() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "request_path": "group.json", "iterations": 12 }), None);
    composer.push_cli(json!({ "alternatives": 0 }));
    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.swarm.iterations, 12);
    assert_eq!(config.swarm.alternative_count, 0);
}
