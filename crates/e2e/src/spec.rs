//! Declarative YAML test specification
//!
//! A spec is one API call plus the expectations checked against its response.

use fakestore_client::NewProduct;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{E2eError, E2eResult};

/// A complete test specification parsed from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSpec {
    /// Unique name for this test
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Tags for filtering tests
    #[serde(default)]
    pub tags: Vec<String>,

    /// The single request this test performs
    pub request: ApiRequest,

    /// Checks applied to the response
    #[serde(default)]
    pub expect: Expectations,
}

/// The API call a spec makes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ApiRequest {
    /// `POST /auth/login`
    Login {
        username: String,
        password: String,
    },

    /// `GET /products/{id}`
    GetProduct {
        id: u64,
    },

    /// `GET /products`
    ListProducts,

    /// `POST /products` with a bearer token
    CreateProduct {
        product: NewProduct,
        /// Obtain the token through the login fixture
        #[serde(default)]
        authenticated: bool,
        /// Use this token verbatim instead
        #[serde(default)]
        token: Option<String>,
    },
}

impl ApiRequest {
    /// Short label used in logs and results
    pub fn label(&self) -> String {
        match self {
            ApiRequest::Login { username, .. } => format!("login:{}", username),
            ApiRequest::GetProduct { id } => format!("get_product:{}", id),
            ApiRequest::ListProducts => "list_products".to_string(),
            ApiRequest::CreateProduct { product, .. } => format!("create_product:{}", product.title),
        }
    }
}

/// Checks applied to a response, evaluated in field order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectations {
    /// Status must (or must not) be 2xx
    #[serde(default)]
    pub ok: Option<bool>,

    /// Exact status code
    #[serde(default)]
    pub status: Option<u16>,

    /// Exact raw body
    #[serde(default)]
    pub text: Option<String>,

    /// Body is a JSON array of this length
    #[serde(default)]
    pub array_len: Option<usize>,

    /// Checks on individual JSON fields
    #[serde(default)]
    pub fields: Vec<FieldAssertion>,
}

/// A check on one JSON field, addressed by a dotted path (`rating.count`, `0.id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldAssertion {
    pub path: String,
    #[serde(default)]
    pub equals: Option<serde_json::Value>,
    /// `false` asserts the path is absent; presence is implied otherwise
    #[serde(default)]
    pub present: Option<bool>,
    #[serde(default)]
    pub non_empty: bool,
}

impl Expectations {
    /// True when nothing would be checked
    pub fn is_empty(&self) -> bool {
        self.ok.is_none()
            && self.status.is_none()
            && self.text.is_none()
            && self.array_len.is_none()
            && self.fields.is_empty()
    }
}

impl TestSpec {
    /// Parse a test spec from YAML string
    pub fn from_yaml(yaml: &str) -> E2eResult<Self> {
        let spec: Self = serde_yaml::from_str(yaml)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Parse a test spec from a YAML file
    pub fn from_file(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
            .map_err(|e| E2eError::SpecParse(format!("{}: {}", path.display(), e)))
    }

    /// Load all test specs from a directory, sorted by name
    pub fn load_all(dir: &Path) -> E2eResult<Vec<Self>> {
        let mut specs = Vec::new();

        if !dir.is_dir() {
            return Err(E2eError::SpecParse(format!(
                "specs directory not found: {}",
                dir.display()
            )));
        }

        for entry in walkdir::WalkDir::new(dir) {
            let entry = entry.map_err(|e| E2eError::SpecParse(e.to_string()))?;
            let is_yaml = entry
                .path()
                .extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false);

            if is_yaml && entry.file_type().is_file() {
                specs.push(Self::from_file(entry.path())?);
            }
        }

        specs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(specs)
    }

    /// Filter specs by tag
    pub fn filter_by_tag<'a>(specs: &'a [Self], tag: &str) -> Vec<&'a Self> {
        specs.iter().filter(|s| s.tags.iter().any(|t| t == tag)).collect()
    }

    fn validate(&self) -> E2eResult<()> {
        if self.name.trim().is_empty() {
            return Err(E2eError::SpecParse("spec name must not be empty".to_string()));
        }

        if self.expect.is_empty() {
            return Err(E2eError::SpecParse(format!(
                "{}: `expect` must contain at least one check",
                self.name
            )));
        }

        for field in &self.expect.fields {
            if field.present == Some(false) && (field.non_empty || field.equals.is_some()) {
                return Err(E2eError::SpecParse(format!(
                    "{}: '{}' cannot be both absent and compared",
                    self.name, field.path
                )));
            }
        }

        if let ApiRequest::CreateProduct { authenticated, token, .. } = &self.request {
            match (authenticated, token) {
                (false, None) => {
                    return Err(E2eError::SpecParse(format!(
                        "{}: create_product needs `authenticated: true` or a `token`",
                        self.name
                    )))
                }
                (true, Some(_)) => {
                    return Err(E2eError::SpecParse(format!(
                        "{}: `authenticated` and `token` are mutually exclusive",
                        self.name
                    )))
                }
                _ => {}
            }
        }

        Ok(())
    }
}
