//! Unit tests for the guides command.

use super::helpers::{guide_list, scratch_root, write_json_file};
use super::*;
use crate::guides::{GuidesArgs, GuidesConfig, config_from_layers_for_test, run_guides_with};
use rstest::rstest;
use serde_json::{Value, json};
use travelverse_core::GuideError;
use travelverse_scorer::GuideScoringError;

#[rstest]
fn converting_without_input_errors() {
    let err = GuidesConfig::try_from(GuidesArgs::default()).expect_err("missing input");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_GUIDES_INPUT);
            assert_eq!(env, ENV_GUIDES_INPUT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn prints_guides_in_viral_order() {
    let (_tmp, root) = scratch_root();
    let path = write_json_file(&root, "guides.json", &guide_list());
    let mut buffer = Vec::new();
    run_guides_with(
        GuidesArgs {
            guides_path: Some(path),
        },
        &mut buffer,
    )
    .expect("guides should rank");

    let output: Value = serde_json::from_slice(&buffer).expect("JSON output");
    let ids: Vec<&str> = output
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|guide| guide["id"].as_str())
        .collect();
    assert_eq!(ids, ["g2", "g3", "g1"]);
    assert_eq!(output[0]["viralPotential"], 1.0);
}

#[rstest]
fn unknown_category_reports_index() {
    let (_tmp, root) = scratch_root();
    let mut guides = guide_list();
    guides[1]["category"] = json!("underwater");
    let path = write_json_file(&root, "guides.json", &guides);
    let err = run_guides_with(
        GuidesArgs {
            guides_path: Some(path),
        },
        &mut Vec::new(),
    )
    .expect_err("bad category");
    match err {
        CliError::ScoreGuides(GuideScoringError::InvalidGuide { index, source }) => {
            assert_eq!(index, 1);
            assert_eq!(source, GuideError::UnknownCategory("underwater".into()));
        }
        other => panic!("expected InvalidGuide, found {other:?}"),
    }
}

#[rstest]
fn environment_layer_supplies_input() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "guides_path": "env-guides.json" }));
    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.guides_path, "env-guides.json");
}
