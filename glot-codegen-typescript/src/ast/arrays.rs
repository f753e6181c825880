//! TypeScript array literal builder.

use glot_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{JsObject, quote};

#[derive(Debug, Clone)]
enum Element {
    String(String),
    Raw(String),
    Object(JsObject),
}

/// Builder for array literals.
///
/// Scalar-only arrays render on one line; arrays containing objects render
/// one element per line.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<Element>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an array of quoted strings.
    pub fn from_strings(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        items.into_iter().fold(Self::new(), |a, s| a.string(s))
    }

    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.elements.push(Element::String(value.into()));
        self
    }

    pub fn raw(mut self, value: impl Into<String>) -> Self {
        self.elements.push(Element::Raw(value.into()));
        self
    }

    pub fn object(mut self, value: JsObject) -> Self {
        self.elements.push(Element::Object(value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Render the scalar elements inline, if there are no objects.
    pub fn inline(&self) -> Option<String> {
        let items = self
            .elements
            .iter()
            .map(|e| match e {
                Element::String(s) => Some(quote(s)),
                Element::Raw(r) => Some(r.clone()),
                Element::Object(_) => None,
            })
            .collect::<Option<Vec<_>>>()?;
        Some(format!("[{}]", items.join(", ")))
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    pub(crate) fn to_fragments_as(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        if let Some(inline) = self.inline() {
            return vec![CodeFragment::Line(format!("{prefix}{inline}{suffix}"))];
        }

        let body = self
            .elements
            .iter()
            .flat_map(|e| match e {
                Element::String(s) => vec![CodeFragment::Line(format!("{},", quote(s)))],
                Element::Raw(r) => vec![CodeFragment::Line(format!("{r},"))],
                Element::Object(o) => o.to_fragments_as("", ","),
            })
            .collect();

        vec![CodeFragment::block(
            format!("{prefix}["),
            body,
            Some(format!("]{suffix}")),
        )]
    }
}

impl Renderable for JsArray {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_fragments_as("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_strings() {
        let a = JsArray::from_strings(["a.Node", "a.Container"]);
        assert_eq!(a.inline().as_deref(), Some("[\"a.Node\", \"a.Container\"]"));
        assert_eq!(JsArray::new().build(), "[]\n");
    }

    #[test]
    fn test_object_elements_render_per_line() {
        let a = JsArray::new()
            .object(JsObject::new().string("name", "x"))
            .build();
        assert_eq!(a, "[\n  {\n    name: \"x\",\n  },\n]\n");
    }
}
