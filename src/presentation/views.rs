use minijinja::Environment;
use serde::Serialize;

use crate::domain::SentimentResult;

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

/// Values rendered into the index page.
#[derive(Debug, Default, Serialize)]
pub struct IndexPage {
    pub backend: String,
    pub text: String,
    pub results: Option<Vec<SentimentResult>>,
    pub error: Option<String>,
}

impl IndexPage {
    pub fn new(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            ..Default::default()
        }
    }
}

/// HTML renderer; `.html` templates are auto-escaped.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render_index(&self, page: &IndexPage) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX_TEMPLATE_NAME)?.render(page)
    }
}
