//! The `glot.toml` configuration file.

use std::{path::PathBuf, str::FromStr};

use glot_ir::AllowList;
use serde::Deserialize;

use crate::{
    Error, Result,
    error::SourceContext,
    validate::{validate_identifier, validate_qualified_name},
};

/// Root of `glot.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Output directory, relative to `glot.toml`.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Declaration file name, relative to the output directory.
    #[serde(default = "default_declarations")]
    pub declarations: String,

    /// Adapter directory, relative to the output directory.
    #[serde(default = "default_adapters")]
    pub adapters: String,

    /// Snapshot files, relative to `glot.toml`.
    pub models: Vec<PathBuf>,

    /// Namespace prefixes eligible for declaration emission.
    #[serde(default)]
    pub allow: AllowList,

    /// Annotation marking a type as a declaration root.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Types whose subtypes are declaration roots.
    #[serde(default)]
    pub roots: Vec<String>,

    #[serde(default)]
    pub emit: EmitConfig,
}

fn default_output() -> PathBuf {
    PathBuf::from("generated")
}

fn default_declarations() -> String {
    "types.d.ts".to_string()
}

fn default_adapters() -> String {
    "adapters".to_string()
}

fn default_marker() -> String {
    "GeneratePolyglot".to_string()
}

/// How supertypes are carried into the declaration dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupertypeStyle {
    /// `interface X extends A, B`
    #[default]
    Extends,
    /// `type X = A & B & { ... }`
    Intersection,
    /// A standalone interface holding the structural member set.
    Flatten,
}

/// What happens to host variance information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariancePolicy {
    /// Drop variance; wildcards collapse to their upper bound.
    #[default]
    Erase,
    /// Keep declaration-site `in`/`out` modifiers on type parameters.
    Preserve,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmitConfig {
    #[serde(default)]
    pub supertypes: SupertypeStyle,
    #[serde(default)]
    pub variance: VariancePolicy,
    /// Discriminant property carried by closed-union variants.
    #[serde(default = "default_discriminant")]
    pub discriminant: String,
}

fn default_discriminant() -> String {
    "kind".to_string()
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            supertypes: SupertypeStyle::default(),
            variance: VariancePolicy::default(),
            discriminant: default_discriminant(),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "glot.toml")
    }
}

/// Parse a configuration with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let generate = &config.generate;

    if generate.models.is_empty() {
        return Err(ctx.validation_error("`models` must list at least one snapshot file"));
    }

    if !generate.declarations.ends_with(".d.ts") {
        return Err(ctx.validation_error_or_at(
            format!(
                "declaration file '{}' must end with `.d.ts`",
                generate.declarations
            ),
            &generate.declarations,
        ));
    }

    for prefix in generate.allow.prefixes() {
        if validate_qualified_name(prefix).is_some() {
            return Err(ctx.validation_error_or_at(
                format!("allow-list entry '{prefix}' is not a namespace prefix"),
                prefix,
            ));
        }
    }

    for root in &generate.roots {
        if let Some(reason) = validate_qualified_name(root) {
            return Err(ctx.validation_error_or_at(format!("root '{root}': {reason}"), root));
        }
    }

    if let Some(reason) = validate_identifier(&generate.emit.discriminant) {
        return Err(ctx.validation_error_or_at(
            format!("discriminant '{}': {reason}", generate.emit.discriminant),
            &generate.emit.discriminant,
        ));
    }

    Ok(())
}

impl SourceContext {
    /// Validation error labelled at the first quoted occurrence of `value`.
    fn validation_error_or_at(&self, message: String, value: &str) -> Box<Error> {
        match find_quoted(self.src(), value) {
            Some(span) => self.validation_error_at(message, span),
            None => self.validation_error(message),
        }
    }
}

fn find_quoted(src: &str, value: &str) -> Option<(usize, usize)> {
    let quoted = format!("\"{value}\"");
    src.find(&quoted).map(|pos| (pos + 1, value.len()))
}
