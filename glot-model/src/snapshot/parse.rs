//! Snapshot parsing and per-file validation.

use super::{DeclKind, Snapshot, TypeDecl};
use crate::{Result, error::SourceContext, validate::validate_qualified_name};

/// Parse a snapshot file with the given filename for error reporting.
pub fn parse_snapshot(content: &str, filename: &str) -> Result<Snapshot> {
    let ctx = SourceContext::new(content, filename);
    let snapshot: Snapshot = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    for decl in &snapshot.types {
        validate_decl(decl, None, &ctx)?;
    }
    Ok(snapshot)
}

fn validate_decl(decl: &TypeDecl, parent: Option<&str>, ctx: &SourceContext) -> Result<()> {
    let name = decl.name();
    let span = decl.name.span();

    if let Some(reason) = validate_qualified_name(name) {
        return Err(ctx.invalid_name_error(name, reason, span));
    }

    if let Some(parent) = parent {
        let is_child = name
            .strip_prefix(parent)
            .and_then(|rest| rest.strip_prefix('$'))
            .is_some_and(|simple| !simple.is_empty() && !simple.contains(['$', '.']));
        if !is_child {
            return Err(ctx.validation_error_at(
                format!("nested type '{name}' must be named '{parent}$<Name>'"),
                span,
            ));
        }
    }

    if !decl.constants.is_empty() && decl.kind != DeclKind::Enum {
        return Err(ctx.validation_error_at(
            format!("'{name}' declares constants but is not an enum"),
            span,
        ));
    }

    if decl.closed && decl.variants.is_empty() {
        return Err(ctx.validation_error_at(
            format!("closed type '{name}' must list its variants"),
            span,
        ));
    }

    if !decl.closed && !decl.variants.is_empty() {
        return Err(ctx.validation_error_at(
            format!("'{name}' lists variants but is not marked `closed = true`"),
            span,
        ));
    }

    for variant in &decl.variants {
        if let Some(reason) = validate_qualified_name(variant) {
            return Err(ctx.invalid_name_error(variant, reason, span.clone()));
        }
    }

    for nested in &decl.nested {
        validate_decl(nested, Some(name), ctx)?;
    }
    Ok(())
}
