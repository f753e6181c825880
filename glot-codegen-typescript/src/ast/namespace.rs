//! TypeScript namespace wrapper.

use glot_codegen::builder::{CodeFragment, Renderable};

/// Wraps fragments in `export namespace A.B { ... }`.
#[derive(Debug, Clone)]
pub struct Namespace {
    path: Vec<String>,
    body: Vec<CodeFragment>,
}

impl Namespace {
    pub fn new(path: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            body: Vec::new(),
        }
    }

    pub fn emit(mut self, node: &impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.path.is_empty() {
            return self.body.clone();
        }
        vec![CodeFragment::block(
            format!("export namespace {} {{", self.path.join(".")),
            self.body.clone(),
            Some("}".to_string()),
        )]
    }
}
