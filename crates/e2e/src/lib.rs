//! Fake Store E2E Test Framework
//!
//! This crate drives end-to-end checks against the Fake Store API:
//! - Builds one API client per test
//! - Supplies fixtures (client, authenticated bearer token)
//! - Parses declarative YAML test specs
//! - Evaluates status/body expectations and reports results as JSON
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    E2E Test Runner (Rust)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TestRunner                                                 │
//! │    ├── fixtures::api_client() -> ApiClient                  │
//! │    ├── fixtures::auth_token() -> bearer token               │
//! │    ├── run_spec(spec: TestSpec) -> TestResult               │
//! │    └── write_results(suite) -> test-results.json            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TestSpec (YAML)                                            │
//! │    ├── name, description, tags                              │
//! │    ├── request                                              │
//! │    │     ├── login { username, password }                   │
//! │    │     ├── get_product { id }                             │
//! │    │     ├── list_products                                  │
//! │    │     └── create_product { product, authenticated }      │
//! │    └── expect { ok?, status?, text?, array_len?, fields }   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod check;
pub mod error;
pub mod fixtures;
pub mod runner;
pub mod spec;

pub use error::{E2eError, E2eResult};
pub use runner::{RunnerConfig, TestResult, TestRunner, TestSuiteResult};
pub use spec::{ApiRequest, Expectations, TestSpec};
