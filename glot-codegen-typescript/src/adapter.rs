//! Guest adapter emitter.
//!
//! One module per recipe schema: a typed options interface, a descriptor
//! the shared runtime validates against, a constructor entry point and,
//! when the recipe visits nodes, a visitor registration function.

use std::{
    collections::HashMap,
    path::{Component, Path},
};

use glot_codegen::{language::TypeMapper, pipeline::Diagnostic};
use glot_ir::{AdapterUnit, OptionSpec, OptionType, RecipeSchema, emitted_path};
use tracing::debug;

use crate::{
    ast::{Const, Fn, Import, Interface, JsArray, JsObject, Param, Property, TypeAlias},
    code_file::CodeFile,
    naming::TS_NAMING,
    type_mapper::TypeScriptTypeMapper,
};

const PHASE: &str = "adapter";

/// Stem of the shared runtime module in the adapter directory.
pub const RUNTIME_MODULE: &str = "runtime";

#[derive(Debug, Clone, Default)]
pub struct RenderedAdapters {
    pub units: Vec<AdapterUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct AdapterEmitter<'a> {
    recipes: &'a [RecipeSchema],
    /// Module specifier of the declaration file, relative to the adapters.
    declarations: String,
}

/// Names derived from a recipe's qualified name.
struct RecipeNames {
    ty: String,
    value: String,
    file: String,
}

impl RecipeNames {
    fn new(qualified: &str) -> Self {
        let base = emitted_path(qualified).concat();
        Self {
            ty: TS_NAMING.type_name(&base),
            value: TS_NAMING.value_name(&base),
            file: TS_NAMING.file_name(&base),
        }
    }
}

impl<'a> AdapterEmitter<'a> {
    /// `declarations` and `adapters` are paths relative to the output directory.
    pub fn new(recipes: &'a [RecipeSchema], declarations: &str, adapters: &str) -> Self {
        Self {
            recipes,
            declarations: declarations_specifier(declarations, adapters),
        }
    }

    pub fn emit(&self) -> RenderedAdapters {
        let mut units = Vec::new();
        let mut diagnostics = Vec::new();
        let mut taken: HashMap<String, &str> = HashMap::new();

        for recipe in self.recipes {
            let names = RecipeNames::new(&recipe.name);

            if names.file == RUNTIME_MODULE {
                diagnostics.push(
                    Diagnostic::error(
                        PHASE,
                        format!("adapter file '{}.ts' is reserved for the runtime", names.file),
                    )
                    .at(&recipe.name)
                    .rule("adapter-file"),
                );
                continue;
            }
            if let Some(first) = taken.get(&names.file) {
                diagnostics.push(
                    Diagnostic::error(
                        PHASE,
                        format!("adapter file '{}.ts' is already generated for {first}", names.file),
                    )
                    .at(&recipe.name)
                    .rule("adapter-file"),
                );
                continue;
            }
            taken.insert(names.file.clone(), &recipe.name);

            units.push(AdapterUnit {
                recipe: recipe.name.clone(),
                file_name: format!("{}.ts", names.file),
                source: self.render(recipe, &names),
            });
        }

        debug!(adapters = units.len(), "rendered adapters");
        RenderedAdapters { units, diagnostics }
    }

    fn render(&self, recipe: &RecipeSchema, names: &RecipeNames) -> String {
        let options_type = format!("{}Options", names.ty);
        let descriptor = format!("{}Descriptor", names.value);

        let mut runtime = Import::new(format!("./{RUNTIME_MODULE}"))
            .named("validateOptions")
            .named_type("RecipeDescriptor")
            .named_type("RecipeHost");
        if recipe.visitor.is_some() {
            runtime = runtime.named_type("VisitCallback").named_type("VisitorTable");
        }

        let mut file = CodeFile::new()
            .import(self.declaration_import(recipe))
            .import(runtime)
            .add(options_interface(recipe, &options_type))
            .add(
                Const::object(&descriptor, descriptor_object(recipe))
                    .ty("RecipeDescriptor"),
            )
            .add(
                Fn::new(format!("create{}", names.ty))
                    .doc(format!("Construct {} through the host.", recipe.display_name))
                    .param(Param::new("host", "RecipeHost"))
                    .param(Param::new("options", &options_type))
                    .returns("unknown")
                    .body_line(format!(
                        "return host.construct({descriptor}.name, validateOptions({descriptor}, options));"
                    )),
            );

        if let Some(visitor) = &recipe.visitor {
            let visit_type = format!("{}Visit", names.ty);
            let target = TypeScriptTypeMapper::emitted_name(&visitor.target);
            let types = JsArray::from_strings(
                std::iter::once(&visitor.target).chain(&visitor.subtypes),
            );
            let types = types.inline().unwrap_or_else(|| "[]".to_string());

            file = file
                .add(TypeAlias::new(&visit_type, format!("VisitCallback<{target}>")))
                .add(
                    Fn::new(format!("register{}Visitor", names.ty))
                        .doc(format!("Dispatch {target} nodes and their subtypes to `visit`."))
                        .param(Param::new("table", "VisitorTable"))
                        .param(Param::new("visit", &visit_type))
                        .returns("void")
                        .body_line(format!("table.register({types}, visit);")),
                );
        }

        file.render()
    }

    /// `import type` of every declaration the adapter mentions.
    fn declaration_import(&self, recipe: &RecipeSchema) -> Import {
        let mut heads: Vec<String> = Vec::new();
        let hosts = recipe.options.iter().flat_map(|o| o.ty.host_types());
        let target = recipe.visitor.iter().map(|v| v.target.as_str());

        for name in hosts.chain(target) {
            let head = emitted_path(name)
                .first()
                .copied()
                .unwrap_or_default()
                .to_string();
            if !heads.contains(&head) {
                heads.push(head);
            }
        }

        heads
            .into_iter()
            .fold(Import::new(&self.declarations).type_only(), Import::named)
    }
}

fn options_interface(recipe: &RecipeSchema, name: &str) -> Interface {
    let mapper = TypeScriptTypeMapper;
    recipe
        .options
        .iter()
        .fold(
            Interface::new(name).doc(Some(format!("Options of {}.", recipe.display_name))),
            |interface, option| {
                let ty = mapper.map_option_type(&option.ty);
                let doc = Some(option.description.as_str()).filter(|d| !d.is_empty());
                let property = if option.required {
                    Property::new(&option.name, ty)
                } else {
                    Property::new(&option.name, format!("{ty} | null")).optional()
                };
                interface.member(property.doc(doc))
            },
        )
}

fn descriptor_object(recipe: &RecipeSchema) -> JsObject {
    let options = recipe
        .options
        .iter()
        .fold(JsArray::new(), |array, option| {
            array.object(option_object(option))
        });

    JsObject::new()
        .string("name", &recipe.name)
        .string("displayName", &recipe.display_name)
        .string("description", &recipe.description)
        .array("options", options)
}

fn option_object(option: &OptionSpec) -> JsObject {
    JsObject::new()
        .string("name", &option.name)
        .string("displayName", &option.display_name)
        .string("description", &option.description)
        .string_opt("example", option.example.as_deref())
        .raw("required", option.required.to_string())
        .object("valueType", value_type(&option.ty))
}

fn value_type(ty: &OptionType) -> JsObject {
    match ty {
        OptionType::String => JsObject::new().string("type", "string"),
        OptionType::Number => JsObject::new().string("type", "number"),
        OptionType::Boolean => JsObject::new().string("type", "boolean"),
        OptionType::Enum(values) => JsObject::new()
            .string("type", "enum")
            .array("values", JsArray::from_strings(values)),
        OptionType::List(inner) => JsObject::new()
            .string("type", "list")
            .object("element", value_type(inner)),
        OptionType::Host(name) => JsObject::new()
            .string("type", "host")
            .string("name", name),
    }
}

/// Module specifier that reaches `declarations` from inside `adapters`.
fn declarations_specifier(declarations: &str, adapters: &str) -> String {
    let depth = Path::new(adapters)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();
    let prefix = if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    };
    let stem = declarations
        .strip_suffix(".d.ts")
        .unwrap_or(declarations)
        .replace('\\', "/");
    format!("{prefix}{stem}")
}

#[cfg(test)]
mod tests {
    use glot_ir::VisitorSpec;

    use super::*;

    fn option(name: &str, ty: OptionType, required: bool) -> OptionSpec {
        OptionSpec {
            name: name.into(),
            ty,
            display_name: name.to_uppercase(),
            description: format!("The {name}."),
            example: required.then(|| "foo.*".to_string()),
            required,
        }
    }

    fn find_and_replace() -> RecipeSchema {
        RecipeSchema {
            name: "org.x.FindAndReplace".into(),
            display_name: "Find and replace".into(),
            description: "Replaces text.".into(),
            options: vec![
                option("pattern", OptionType::String, true),
                option("replacement", OptionType::String, false),
            ],
            visitor: None,
        }
    }

    #[test]
    fn test_pattern_replacement_adapter() {
        let recipes = vec![find_and_replace()];
        let out = AdapterEmitter::new(&recipes, "types.d.ts", "adapters").emit();

        assert!(out.diagnostics.is_empty());
        assert_eq!(out.units.len(), 1);
        assert_eq!(out.units[0].file_name, "find-and-replace.ts");
        insta::assert_snapshot!(out.units[0].source, @r#"
        import { validateOptions, type RecipeDescriptor, type RecipeHost } from "./runtime";

        /** Options of Find and replace. */
        export interface FindAndReplaceOptions {
          /** The pattern. */
          pattern: string;
          /** The replacement. */
          replacement?: string | null;
        }

        export const findAndReplaceDescriptor: RecipeDescriptor = {
          name: "org.x.FindAndReplace",
          displayName: "Find and replace",
          description: "Replaces text.",
          options: [
            {
              name: "pattern",
              displayName: "PATTERN",
              description: "The pattern.",
              example: "foo.*",
              required: true,
              valueType: {
                type: "string",
              },
            },
            {
              name: "replacement",
              displayName: "REPLACEMENT",
              description: "The replacement.",
              required: false,
              valueType: {
                type: "string",
              },
            },
          ],
        };

        /** Construct Find and replace through the host. */
        export function createFindAndReplace(host: RecipeHost, options: FindAndReplaceOptions): unknown {
          return host.construct(findAndReplaceDescriptor.name, validateOptions(findAndReplaceDescriptor, options));
        }
        "#);
    }

    #[test]
    fn test_visitor_registration() {
        let recipe = RecipeSchema {
            name: "org.x.RenameNodes".into(),
            display_name: "Rename nodes".into(),
            description: "Renames.".into(),
            options: vec![option(
                "kinds",
                OptionType::List(Box::new(OptionType::Enum(vec!["A".into(), "B".into()]))),
                true,
            )],
            visitor: Some(VisitorSpec {
                target: "org.x.J".into(),
                subtypes: vec!["org.x.J$Binary".into()],
            }),
        };
        let recipes = vec![recipe];
        let out = AdapterEmitter::new(&recipes, "types.d.ts", "adapters").emit();
        let source = &out.units[0].source;

        assert!(source.starts_with(
            "import type { J } from \"../types\";\nimport { validateOptions, type RecipeDescriptor, type RecipeHost, type VisitCallback, type VisitorTable } from \"./runtime\";\n"
        ));
        assert!(source.contains("  kinds: (\"A\" | \"B\")[];\n"));
        assert!(source.contains(
            "      valueType: {\n        type: \"list\",\n        element: {\n          type: \"enum\",\n          values: [\"A\", \"B\"],\n        },\n      },\n"
        ));
        assert!(source.ends_with(
            "export type RenameNodesVisit = VisitCallback<J>;\n\n/** Dispatch J nodes and their subtypes to `visit`. */\nexport function registerRenameNodesVisitor(table: VisitorTable, visit: RenameNodesVisit): void {\n  table.register([\"org.x.J\", \"org.x.J$Binary\"], visit);\n}\n"
        ));
    }

    #[test]
    fn test_host_option_imports_top_level_name() {
        let recipe = RecipeSchema {
            options: vec![option(
                "template",
                OptionType::Host("org.x.J$Literal".into()),
                true,
            )],
            ..find_and_replace()
        };
        let recipes = vec![recipe];
        let out = AdapterEmitter::new(&recipes, "gen/types.d.ts", "gen/adapters").emit();
        let source = &out.units[0].source;

        assert!(source.starts_with("import type { J } from \"../../gen/types\";\n"));
        assert!(source.contains("  template: J.Literal;\n"));
        assert!(source.contains("type: \"host\",\n"));
    }

    #[test]
    fn test_file_name_collision_is_isolated() {
        let recipes = vec![
            find_and_replace(),
            RecipeSchema {
                name: "org.y.FindAndReplace".into(),
                ..find_and_replace()
            },
            RecipeSchema {
                name: "org.x.Runtime".into(),
                ..find_and_replace()
            },
        ];
        let out = AdapterEmitter::new(&recipes, "types.d.ts", "adapters").emit();

        assert_eq!(out.units.len(), 1);
        assert_eq!(out.units[0].recipe, "org.x.FindAndReplace");
        let located: Vec<_> = out
            .diagnostics
            .iter()
            .map(|d| (d.location.as_deref(), d.rule.as_deref()))
            .collect();
        assert_eq!(
            located,
            vec![
                (Some("org.y.FindAndReplace"), Some("adapter-file")),
                (Some("org.x.Runtime"), Some("adapter-file")),
            ]
        );
    }

    #[test]
    fn test_declarations_specifier() {
        assert_eq!(declarations_specifier("types.d.ts", "adapters"), "../types");
        assert_eq!(declarations_specifier("types.d.ts", "."), "./types");
        assert_eq!(declarations_specifier("decl/index.d.ts", "a/b"), "../../decl/index");
    }
}
