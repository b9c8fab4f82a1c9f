//! Main test runner that executes specs against the API and collects results

use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Utc};
use fakestore_client::{ApiClient, ApiResponse, ClientConfig, Credentials};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::check::{evaluate, AssertionResult};
use crate::error::{E2eError, E2eResult};
use crate::fixtures;
use crate::spec::{ApiRequest, TestSpec};

/// Result of running a single test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub request: String,
    pub success: bool,
    pub duration_ms: u64,
    pub status: Option<u16>,
    pub assertions: Vec<AssertionResult>,
    pub error: Option<String>,
}

/// Result of running all tests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuiteResult {
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<TestResult>,
}

impl TestSuiteResult {
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Main E2E test runner
pub struct TestRunner {
    /// Client configuration; each spec gets its own client built from it
    client_config: ClientConfig,

    /// Credentials used by the token fixture
    credentials: Credentials,

    /// Test specs directory
    specs_dir: PathBuf,

    /// Output directory for results
    output_dir: PathBuf,
}

impl TestRunner {
    /// Create a new test runner with default configuration
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    /// Create a test runner with custom configuration
    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            client_config: config.client,
            credentials: config.credentials,
            specs_dir: config.specs_dir,
            output_dir: config.output_dir,
        }
    }

    /// Base URL specs are run against
    pub fn base_url(&self) -> &str {
        &self.client_config.base_url
    }

    /// Run all tests in the specs directory
    pub async fn run_all(&self) -> E2eResult<TestSuiteResult> {
        let specs = TestSpec::load_all(&self.specs_dir)?;
        self.run_specs(&specs).await
    }

    /// Run tests matching a tag
    pub async fn run_tagged(&self, tag: &str) -> E2eResult<TestSuiteResult> {
        let specs = TestSpec::load_all(&self.specs_dir)?;
        let filtered: Vec<TestSpec> = TestSpec::filter_by_tag(&specs, tag)
            .into_iter()
            .cloned()
            .collect();
        self.run_specs(&filtered).await
    }

    /// Run a specific test by name
    pub async fn run_test(&self, name: &str) -> E2eResult<TestResult> {
        let spec = self.load_test(name)?;
        Ok(self.run_spec(&spec).await)
    }

    /// Run a specific test by name as a one-test suite
    pub async fn run_named(&self, name: &str) -> E2eResult<TestSuiteResult> {
        let spec = self.load_test(name)?;
        self.run_specs(std::slice::from_ref(&spec)).await
    }

    /// Find a spec by name in the specs directory
    pub fn load_test(&self, name: &str) -> E2eResult<TestSpec> {
        TestSpec::load_all(&self.specs_dir)?
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| E2eError::SpecParse(format!("Test not found: {}", name)))
    }

    /// Run a list of test specs
    pub async fn run_specs(&self, specs: &[TestSpec]) -> E2eResult<TestSuiteResult> {
        let started_at = Utc::now();
        let start = Instant::now();
        let mut results = Vec::with_capacity(specs.len());
        let mut passed = 0;
        let mut failed = 0;

        info!("Running {} test(s) against {}...", specs.len(), self.client_config.base_url);

        for spec in specs {
            let result = self.run_spec(spec).await;
            if result.success {
                passed += 1;
                info!("✓ {} ({} ms)", result.name, result.duration_ms);
            } else {
                failed += 1;
                error!("✗ {} - {}", result.name, result.error.as_deref().unwrap_or("unknown error"));
            }
            results.push(result);
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        info!("Test Results: {} passed, {} failed ({} ms)", passed, failed, duration_ms);

        Ok(TestSuiteResult {
            base_url: self.client_config.base_url.clone(),
            started_at,
            total: specs.len(),
            passed,
            failed,
            duration_ms,
            results,
        })
    }

    /// Run a single test spec
    ///
    /// Setup and transport failures are recorded in the result rather than
    /// aborting the suite.
    pub async fn run_spec(&self, spec: &TestSpec) -> TestResult {
        let start = Instant::now();
        let request = spec.request.label();
        debug!("Running test: {} ({})", spec.name, request);

        let outcome = self.execute(spec).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(response) => {
                let assertions = evaluate(&spec.expect, &response);
                let error = assertions.iter().find(|a| !a.passed).map(|a| {
                    format!(
                        "Assertion failed: {} ({})",
                        a.description,
                        a.detail.as_deref().unwrap_or("no detail")
                    )
                });

                TestResult {
                    name: spec.name.clone(),
                    request,
                    success: error.is_none(),
                    duration_ms,
                    status: Some(response.status()),
                    assertions,
                    error,
                }
            }
            Err(e) => TestResult {
                name: spec.name.clone(),
                request,
                success: false,
                duration_ms,
                status: None,
                assertions: vec![],
                error: Some(e.to_string()),
            },
        }
    }

    /// Build a fresh client, run fixtures, and perform the test's single call
    async fn execute(&self, spec: &TestSpec) -> E2eResult<ApiResponse> {
        let client: ApiClient = fixtures::api_client(&self.client_config)?;

        let response = match &spec.request {
            ApiRequest::Login { username, password } => client.login(username, password).await?,
            ApiRequest::GetProduct { id } => client.get_single_product(*id).await?,
            ApiRequest::ListProducts => client.get_all_products().await?,
            ApiRequest::CreateProduct { product, authenticated, token } => {
                let token = match token {
                    Some(token) => token.clone(),
                    None if *authenticated => fixtures::auth_token(&client, &self.credentials).await?,
                    None => {
                        return Err(E2eError::SpecParse(format!(
                            "{}: create_product has no token source",
                            spec.name
                        )))
                    }
                };
                client.create_product(product, &token).await?
            }
        };

        Ok(response)
    }

    /// Write test results to JSON file
    pub fn write_results(&self, results: &TestSuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join("test-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the test runner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub client: ClientConfig,
    pub credentials: Credentials,
    pub specs_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            credentials: fixtures::valid_credentials(),
            specs_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/specs")),
            output_dir: PathBuf::from("test-results"),
        }
    }
}
