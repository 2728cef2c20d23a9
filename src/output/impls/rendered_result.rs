use std::fmt;
use std::fmt::Formatter;
use crate::output::structs::rendered_result::RenderedResult;

impl RenderedResult {
    pub fn new(body: impl Into<String>) -> RenderedResult {
        RenderedResult { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }
}

impl From<String> for RenderedResult {
    fn from(body: String) -> Self {
        RenderedResult { body }
    }
}

impl fmt::Display for RenderedResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
