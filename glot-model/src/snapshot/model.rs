//! The merged host model: every snapshot type, nested types included,
//! indexed by qualified name.

use std::{collections::HashSet, str::FromStr};

use indexmap::IndexMap;

use super::{Snapshot, TypeDecl, parse_snapshot};
use crate::{Error, Result, TypeExpr, error::SourceContext};

#[derive(Debug, Clone, Default)]
pub struct Model {
    types: IndexMap<String, TypeDecl>,
}

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Model::parse_sources([("model.toml", s)])
    }
}

impl Model {
    /// Parse and merge snapshot sources given as `(filename, content)` pairs.
    pub fn parse_sources<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut model = Model::default();
        let mut origins: IndexMap<String, String> = IndexMap::new();

        for (filename, content) in sources {
            let snapshot = parse_snapshot(content, filename)?;
            let ctx = SourceContext::new(content, filename);
            model.merge(snapshot, &ctx, &mut origins)?;
        }
        Ok(model)
    }

    fn merge(
        &mut self,
        snapshot: Snapshot,
        ctx: &SourceContext,
        origins: &mut IndexMap<String, String>,
    ) -> Result<()> {
        let mut stack: Vec<TypeDecl> = snapshot.types.into_iter().rev().collect();
        while let Some(decl) = stack.pop() {
            let name = decl.name().to_string();
            if let Some(first) = origins.get(&name) {
                return Err(ctx.duplicate_type_error(&name, first, decl.name.span()));
            }
            origins.insert(name.clone(), ctx.filename().to_string());
            stack.extend(decl.nested.iter().rev().cloned());
            self.types.insert(name, decl);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All types in declaration order, each parent before its nested types.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns true if `sub` reaches `sup` through declared supertypes.
    /// Supertypes missing from the model end the walk on that branch.
    pub fn is_assignable(&self, sub: &str, sup: &str) -> bool {
        let mut stack = vec![sub];
        let mut seen = HashSet::new();
        while let Some(name) = stack.pop() {
            if name == sup {
                return true;
            }
            if !seen.insert(name) {
                continue;
            }
            if let Some(decl) = self.types.get(name) {
                stack.extend(decl.supertypes.iter().filter_map(|s| match s {
                    TypeExpr::Named { name, .. } => Some(name.as_str()),
                    _ => None,
                }));
            }
        }
        false
    }
}
