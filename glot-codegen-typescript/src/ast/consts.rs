//! TypeScript const declaration builder.

use glot_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::JsObject;

#[derive(Debug, Clone)]
enum ConstValue {
    Raw(String),
    Object(JsObject),
}

/// Builder for `const` declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    ty: Option<String>,
    doc: Option<String>,
    value: ConstValue,
}

impl Const {
    /// A const initialized with a raw expression.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            doc: None,
            value: ConstValue::Raw(value.into()),
        }
    }

    /// A const initialized with an object literal.
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self {
            name: name.into(),
            ty: None,
            doc: None,
            value: ConstValue::Object(value),
        }
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let ty = self
            .ty
            .as_ref()
            .map(|t| format!(": {t}"))
            .unwrap_or_default();
        let lhs = format!("export const {}{ty} = ", self.name);

        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }
        match &self.value {
            ConstValue::Raw(value) => fragments.push(CodeFragment::Line(format!("{lhs}{value};"))),
            ConstValue::Object(object) => fragments.extend(object.to_fragments_as(&lhs, ";")),
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_const() {
        let c = Const::new("VERSION", "\"1.0\"").build();
        assert_eq!(c, "export const VERSION = \"1.0\";\n");
    }

    #[test]
    fn test_object_const() {
        let c = Const::object("descriptor", JsObject::new().string("name", "x"))
            .ty("RecipeDescriptor")
            .build();
        assert_eq!(
            c,
            "export const descriptor: RecipeDescriptor = {\n  name: \"x\",\n};\n"
        );
    }
}
