//! Recipe drafts: what a recipe declares, before any rule is checked.

use std::collections::HashSet;

use glot_ir::{OptionSpec, OptionType, Primitive, RecipeSchema, VisitorSpec};
use glot_model::{Annotated, Annotation, DeclKind, MemberDecl, ParamDecl, TypeDecl, TypeExpr, annotations};

use super::LintContext;
use crate::resolve::{Builtin, lookup_builtin};

/// One recipe as declared in the model.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    /// Qualified name of the recipe type.
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Options in the argument order of the first constructor that takes
    /// options; options it does not take follow in declaration order.
    pub options: Vec<DraftOption>,
    /// Names declared more than once among the fields, or within one constructor.
    pub duplicates: Vec<String>,
    pub visitor: Option<DraftVisitor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftOption {
    pub name: String,
    pub ty: TypeExpr,
    pub nullable: bool,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub example: Option<String>,
    /// The explicit `required` argument, if any.
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftVisitor {
    pub target: Option<String>,
}

impl RecipeDraft {
    pub fn from_decl(decl: &TypeDecl) -> Self {
        let recipe = decl.annotation(annotations::RECIPE);
        let mut options: Vec<DraftOption> = Vec::new();
        let mut duplicates = Vec::new();

        let fields = decl
            .members
            .iter()
            .filter(|m| !m.is_method() && m.has_annotation(annotations::OPTION));
        for field in fields {
            if options.iter().any(|o| o.name == field.name) {
                push_unique(&mut duplicates, &field.name);
            } else {
                options.push(DraftOption::from_field(field));
            }
        }

        for constructor in &decl.constructors {
            let mut seen = HashSet::new();
            let params = constructor
                .params
                .iter()
                .filter(|p| p.has_annotation(annotations::OPTION));
            for param in params {
                if !seen.insert(param.name.as_str()) {
                    push_unique(&mut duplicates, &param.name);
                    continue;
                }
                let option = DraftOption::from_param(param);
                match options.iter_mut().find(|o| o.name == option.name) {
                    Some(existing) => existing.merge(option),
                    None => options.push(option),
                }
            }
        }

        if let Some(constructor) = decl
            .constructors
            .iter()
            .find(|c| c.params.iter().any(|p| p.has_annotation(annotations::OPTION)))
        {
            options.sort_by_key(|o| {
                constructor
                    .params
                    .iter()
                    .position(|p| p.name == o.name)
                    .unwrap_or(usize::MAX)
            });
        }

        Self {
            name: decl.name().to_string(),
            display_name: recipe.and_then(|a| a.arg_str("display_name")),
            description: recipe.and_then(|a| a.arg_str("description")),
            options,
            duplicates,
            visitor: decl.annotation(annotations::VISITOR).map(|a| DraftVisitor {
                target: a.arg_str("target").filter(|t| !t.trim().is_empty()),
            }),
        }
    }

    /// Build the schema. Fails with the first option whose type is not
    /// representable.
    pub fn to_schema(&self, cx: &LintContext<'_>) -> Result<RecipeSchema, String> {
        let options = self
            .options
            .iter()
            .map(|option| {
                Ok(OptionSpec {
                    name: option.name.clone(),
                    ty: option_type(&option.ty, cx)
                        .map_err(|reason| format!("option '{}': {reason}", option.name))?,
                    display_name: option
                        .display_name
                        .clone()
                        .unwrap_or_else(|| option.name.clone()),
                    description: option.description.clone().unwrap_or_default(),
                    example: option.example.clone().filter(|e| !e.trim().is_empty()),
                    required: option.is_required(),
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        let visitor = self
            .visitor
            .as_ref()
            .and_then(|v| v.target.as_deref())
            .filter(|target| cx.graph.contains(target))
            .map(|target| VisitorSpec {
                target: target.to_string(),
                subtypes: cx
                    .graph
                    .subtypes_of(target)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });

        Ok(RecipeSchema {
            name: self.name.clone(),
            display_name: self.display_name.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            options,
            visitor,
        })
    }
}

impl DraftOption {
    fn new(name: &str, ty: &TypeExpr, nullable: bool, annotation: Option<&Annotation>) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.clone(),
            nullable,
            display_name: annotation.and_then(|a| a.arg_str("display_name")),
            description: annotation.and_then(|a| a.arg_str("description")),
            example: annotation.and_then(|a| a.arg_str("example")),
            required: annotation.and_then(|a| a.arg_bool("required")),
        }
    }

    fn from_field(field: &MemberDecl) -> Self {
        Self::new(
            &field.name,
            &field.ty,
            field.is_nullable(),
            field.annotation(annotations::OPTION),
        )
    }

    fn from_param(param: &ParamDecl) -> Self {
        Self::new(
            &param.name,
            &param.ty,
            param.is_nullable(),
            param.annotation(annotations::OPTION),
        )
    }

    /// A field and a constructor parameter describing the same option.
    fn merge(&mut self, other: DraftOption) {
        self.nullable |= other.nullable;
        self.display_name = self.display_name.take().or(other.display_name);
        self.description = self.description.take().or(other.description);
        self.example = self.example.take().or(other.example);
        self.required = self.required.or(other.required);
    }

    /// Optional only when marked `required = false`, nullable, or wrapped in `Optional`.
    pub fn is_required(&self) -> bool {
        self.required != Some(false) && !self.nullable && !is_optional_wrapper(&self.ty)
    }

    pub fn has_example(&self) -> bool {
        self.example.as_deref().is_some_and(|e| !e.trim().is_empty())
    }
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

fn is_optional_wrapper(ty: &TypeExpr) -> bool {
    matches!(ty, TypeExpr::Named { name, .. } if lookup_builtin(name) == Some(Builtin::Optional))
}

/// Map a declared option type to its scripting-visible type.
///
/// `Optional<T>` maps to `T`. Model enums become their constants; any other
/// model type must be part of the declaration closure.
pub fn option_type(ty: &TypeExpr, cx: &LintContext<'_>) -> Result<OptionType, String> {
    let unsupported = || format!("unsupported option type `{ty}`");
    match ty {
        TypeExpr::Array(element) => Ok(OptionType::List(Box::new(element_type(element, cx)?))),
        TypeExpr::Wildcard(_) => Err(unsupported()),
        TypeExpr::Named { name, args } => {
            if let Some(builtin) = lookup_builtin(name) {
                return match (builtin, args.as_slice()) {
                    (Builtin::Primitive(Primitive::String), _) => Ok(OptionType::String),
                    (Builtin::Primitive(Primitive::Number), _) => Ok(OptionType::Number),
                    (Builtin::Primitive(Primitive::Boolean), _) => Ok(OptionType::Boolean),
                    (Builtin::Optional, [inner]) => option_type(inner, cx),
                    (Builtin::Array | Builtin::Set, [element]) => {
                        Ok(OptionType::List(Box::new(element_type(element, cx)?)))
                    }
                    _ => Err(unsupported()),
                };
            }

            match cx.model.get(name) {
                Some(decl) if decl.kind == DeclKind::Enum => {
                    Ok(OptionType::Enum(decl.constants.clone()))
                }
                _ if cx.graph.contains(name) => Ok(OptionType::Host(name.clone())),
                _ => Err(format!("host type '{name}' is not in the declaration closure")),
            }
        }
    }
}

fn element_type(ty: &TypeExpr, cx: &LintContext<'_>) -> Result<OptionType, String> {
    match option_type(ty, cx)? {
        OptionType::List(_) => Err(format!("nested list `{ty}` is not a supported option type")),
        element => Ok(element),
    }
}

#[cfg(test)]
mod tests {
    use glot_ir::{TypeGraph, TypeKind, TypeNode};
    use glot_model::Model;

    use super::*;

    const MODEL: &str = r#"
        [[types]]
        name = "org.x.ReplaceText"
        kind = "class"
        annotations = [{ name = "Recipe", args = { display_name = "Replace text", description = "Replaces text." } }]

        [[types.members]]
        name = "pattern"
        type = "String"
        visibility = "private"
        annotations = [{ name = "Option", args = { display_name = "Pattern", description = "Regex.", example = "foo.*" } }]

        [[types.members]]
        name = "replacement"
        type = "String"
        visibility = "private"
        annotations = [{ name = "Option", args = { display_name = "Replacement", description = "Text.", required = false } }]

        [[types.members]]
        name = "helper"
        type = "String"
        visibility = "private"

        [[types.constructors]]
        params = [
            { name = "pattern", type = "String", annotations = ["Option"] },
            { name = "replacement", type = "String", annotations = ["Option", "Nullable"] },
            { name = "style", type = "org.x.Style", annotations = [{ name = "Option", args = { example = "TABS" } }] },
        ]

        [[types]]
        name = "org.x.Style"
        kind = "enum"
        constants = ["TABS", "SPACES"]
    "#;

    fn draft() -> (Model, RecipeDraft) {
        let model: Model = MODEL.parse().unwrap();
        let draft = RecipeDraft::from_decl(model.get("org.x.ReplaceText").unwrap());
        (model, draft)
    }

    #[test]
    fn test_fields_then_parameters() {
        let (_, draft) = draft();

        let names: Vec<_> = draft.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["pattern", "replacement", "style"]);
        assert!(draft.duplicates.is_empty());
        assert_eq!(draft.display_name.as_deref(), Some("Replace text"));
    }

    #[test]
    fn test_constructor_order_wins_over_field_order() {
        let model: Model = r#"
            [[types]]
            name = "org.x.Swap"
            kind = "class"

            [[types.members]]
            name = "first"
            type = "String"
            annotations = [{ name = "Option", args = { example = "a" } }]

            [[types.members]]
            name = "second"
            type = "int"
            annotations = [{ name = "Option", args = { example = "1" } }]

            [[types.members]]
            name = "extra"
            type = "String"
            annotations = [{ name = "Option", args = { required = false } }]

            [[types.constructors]]
            params = [
                { name = "second", type = "int", annotations = ["Option"] },
                { name = "first", type = "String", annotations = ["Option"] },
            ]
        "#
        .parse()
        .unwrap();

        let draft = RecipeDraft::from_decl(model.get("org.x.Swap").unwrap());

        let names: Vec<_> = draft.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first", "extra"]);
    }

    #[test]
    fn test_field_and_parameter_merge() {
        let (_, draft) = draft();

        let replacement = &draft.options[1];
        assert!(replacement.nullable);
        assert_eq!(replacement.display_name.as_deref(), Some("Replacement"));
        assert!(!replacement.is_required());
        assert!(draft.options[0].is_required());
        assert!(draft.options[0].has_example());
    }

    #[test]
    fn test_schema_types() {
        let (model, draft) = draft();
        let graph = TypeGraph::new();
        let schema = draft.to_schema(&LintContext { model: &model, graph: &graph }).unwrap();

        assert_eq!(schema.options[0].ty, OptionType::String);
        assert_eq!(schema.options[0].example.as_deref(), Some("foo.*"));
        assert!(schema.options[0].required);
        assert!(!schema.options[1].required);
        assert_eq!(
            schema.options[2].ty,
            OptionType::Enum(vec!["TABS".into(), "SPACES".into()])
        );
        assert_eq!(schema.options[2].display_name, "style");
        assert_eq!(schema.required_options().count(), 2);
    }

    #[test]
    fn test_option_type_mapping() {
        let model = Model::default();
        let mut graph = TypeGraph::new();
        graph.insert(TypeNode::new("org.x.Tree", TypeKind::Interface));
        let cx = LintContext { model: &model, graph: &graph };
        let map = |s: &str| option_type(&s.parse::<TypeExpr>().unwrap(), &cx);

        assert_eq!(map("int"), Ok(OptionType::Number));
        assert_eq!(map("java.util.Optional<Boolean>"), Ok(OptionType::Boolean));
        assert_eq!(map("String[]"), Ok(OptionType::List(Box::new(OptionType::String))));
        assert_eq!(
            map("java.util.Set<org.x.Tree>"),
            Ok(OptionType::List(Box::new(OptionType::Host("org.x.Tree".into()))))
        );
        assert_eq!(
            map("org.x.Missing"),
            Err("host type 'org.x.Missing' is not in the declaration closure".into())
        );
        assert!(map("java.util.Map<String, String>").is_err());
        assert!(map("java.util.List<String>[]").is_err());
    }

    #[test]
    fn test_duplicates_within_one_constructor() {
        let model: Model = r#"
            [[types]]
            name = "org.x.R"
            kind = "class"

            [[types.constructors]]
            params = [
                { name = "a", type = "String", annotations = ["Option"] },
                { name = "a", type = "String", annotations = ["Option"] },
            ]

            [[types.constructors]]
            params = [{ name = "a", type = "String", annotations = ["Option"] }]
        "#
        .parse()
        .unwrap();

        let draft = RecipeDraft::from_decl(model.get("org.x.R").unwrap());
        assert_eq!(draft.duplicates, vec!["a"]);
        assert_eq!(draft.options.len(), 1);
    }
}
