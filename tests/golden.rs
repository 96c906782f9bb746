//! Golden-file tests for Jenkinsfile rendering

use pipegen::prelude::*;
use pipegen::samples::flask_pipeline;
use pretty_assertions::assert_eq;
use std::path::Path;

const FLASK_GOLDEN: &str = include_str!("golden/flask.Jenkinsfile");

fn golden(text: &str) -> &str {
    text.trim_end_matches('\n')
}

#[test]
fn test_flask_sample_matches_golden() {
    assert_eq!(build(&flask_pipeline()), golden(FLASK_GOLDEN));
}

#[test]
fn test_flask_yaml_fixture_matches_golden() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/flask.yaml");
    let config = PipelineConfig::from_file(&path).unwrap();

    assert_eq!(config, flask_pipeline());
    assert_eq!(build(&config), golden(FLASK_GOLDEN));
}

#[test]
fn test_flask_sample_is_strictly_valid() {
    assert_eq!(build_strict(&flask_pipeline()).unwrap(), golden(FLASK_GOLDEN));
}

#[test]
fn test_minimal_document() {
    insta::assert_snapshot!(build(&PipelineConfig::default()), @r"
    pipeline {

        agent any

    }
    ");
}

#[test]
fn test_environment_and_stage_only() {
    let config = PipelineConfig::builder()
        .agent("none")
        .env("CARGO_TERM_COLOR", "always")
        .stage(Stage::builder("Test").sh("cargo test").build())
        .build();

    let expected = "\
pipeline {

    agent none

    environment {
        CARGO_TERM_COLOR = \"always\"
    }

    stages {
        stage('Test') {
            steps {
                sh 'cargo test'
            }
        }
    }

}";
    assert_eq!(build(&config), expected);
}

#[test]
fn test_round_trip_scenario_choice_parameter() {
    let config = PipelineConfig::builder()
        .parameter(Parameter::choice("ENV", ["dev", "prod"]).with_description("target env"))
        .build();
    let output = build(&config);

    assert!(output.contains("name: 'ENV'"));
    assert!(output.contains("choices: ['dev', 'prod']"));
    assert!(output.contains("description: 'target env'"));
}

#[test]
fn test_unquoted_yaml_versions_render_as_written() {
    let yaml = "parameters:\n  - type: choice\n    name: PY\n    options: [3.9, 3.10]\n";
    let config = PipelineConfig::from_yaml_str(yaml).unwrap();
    let programmatic = PipelineConfig::builder()
        .parameter(Parameter::choice("PY", ["3.9", "3.10"]))
        .build();

    assert!(build(&config).contains("            choices: ['3.9', '3.10'],\n"));
    assert_eq!(build(&config), build(&programmatic));
}

#[test]
fn test_post_actions_scenario() {
    let json = r#"{"post_actions": {"always": ["cleanup()"], "success": ["notify()"]}}"#;
    let output = build(&PipelineConfig::from_json_str(json).unwrap());

    let always = output.find("        always {\n            cleanup()\n        }").unwrap();
    let success = output.find("        success {\n            notify()\n        }").unwrap();
    assert!(always < success);
}

#[test]
fn test_unknown_parameter_does_not_corrupt_document() {
    let yaml = r"
parameters:
  - type: choice
    name: ENV
    options: [dev]
  - type: password
    name: SECRET
  - type: string
    name: TAG
stages:
  - name: Build
    steps: [make]
";
    let config = PipelineConfig::from_yaml_str(yaml).unwrap();
    let without_unknown = PipelineConfig::builder()
        .parameter(Parameter::choice("ENV", ["dev"]))
        .parameter(Parameter::string("TAG"))
        .stage(Stage::new("Build", ["make"]))
        .build();

    assert_eq!(build(&config), build(&without_unknown));
    assert!(matches!(
        build_strict(&config),
        Err(PipelineError::Validation(ValidationError::UnknownParameterKind { .. }))
    ));
}
