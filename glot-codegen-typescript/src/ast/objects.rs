//! TypeScript object literal builder.

use glot_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{JsArray, quote};

/// The value of an object property.
#[derive(Debug, Clone)]
enum PropertyValue {
    /// Quoted on render.
    String(String),
    Raw(String),
    Object(JsObject),
    Array(JsArray),
}

#[derive(Debug, Clone)]
struct Property {
    key: String,
    value: PropertyValue,
}

/// Builder for object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::String(value.into()))
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::Raw(value.into()))
    }

    pub fn object(self, key: impl Into<String>, value: JsObject) -> Self {
        self.push(key, PropertyValue::Object(value))
    }

    pub fn array(self, key: impl Into<String>, value: JsArray) -> Self {
        self.push(key, PropertyValue::Array(value))
    }

    /// Conditionally add a string property using an Option.
    pub fn string_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.string(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn push(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value,
        });
        self
    }

    /// Render as `{prefix}{ ... }{suffix}`, one property per line.
    pub(crate) fn to_fragments_as(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Line(format!("{prefix}{{}}{suffix}"))];
        }

        let body = self
            .properties
            .iter()
            .flat_map(|p| {
                let key = format!("{}: ", p.key);
                match &p.value {
                    PropertyValue::String(s) => {
                        vec![CodeFragment::Line(format!("{key}{},", quote(s)))]
                    }
                    PropertyValue::Raw(r) => vec![CodeFragment::Line(format!("{key}{r},"))],
                    PropertyValue::Object(o) => o.to_fragments_as(&key, ","),
                    PropertyValue::Array(a) => a.to_fragments_as(&key, ","),
                }
            })
            .collect();

        vec![CodeFragment::block(
            format!("{prefix}{{"),
            body,
            Some(format!("}}{suffix}")),
        )]
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_fragments_as("", "")
    }
}
