//! Bundled sample pipelines

use crate::pipeline::{Parameter, PipelineConfig, Stage};

const BUILD_SCRIPT: &str = concat!(
    "script {\n",
    "                    def imageTag = \"${env.DOCKER_IMAGE}:${params.PYTHON_VERSION}-${params.DOCKER_TAG}\"\n",
    "                    sh \"docker build --build-arg PYTHON_VERSION=${params.PYTHON_VERSION} -t ${imageTag} .\"\n",
    "                    env.BUILT_IMAGE = imageTag\n",
    "                }",
);

/// Docker build, test and deploy of a Flask application.
///
/// The Python version and image tag are build parameters; deployment only
/// runs on `main`.
#[must_use]
pub fn flask_pipeline() -> PipelineConfig {
    PipelineConfig::builder()
        .agent("any")
        .parameter(
            Parameter::choice("PYTHON_VERSION", ["3.9", "3.10", "3.11", "3.12"])
                .with_description("Select Python version"),
        )
        .parameter(
            Parameter::string("DOCKER_TAG")
                .with_default("latest")
                .with_description("Docker image tag"),
        )
        .env("DOCKER_IMAGE", "flask-app")
        .env("REGISTRY", "your-registry.com")
        .stage(Stage::new("Checkout", ["checkout scm"]))
        .stage(Stage::new("Build", [BUILD_SCRIPT]))
        .stage(Stage::new(
            "Test",
            ["sh \"docker run --rm ${env.BUILT_IMAGE} python -m pytest tests/ -v\""],
        ))
        .stage(
            Stage::new("Deploy", ["sh \"docker push ${env.BUILT_IMAGE}\""])
                .with_when("branch 'main'"),
        )
        .post("always", ["sh \"docker image prune -f\""])
        .post("success", ["echo \"Build successful!\""])
        .post("failure", ["echo \"Build failed!\""])
        .build()
}
