//! List command report data structures.

use super::output::{Output, Report};

/// Candidates found by discovery.
#[derive(Debug)]
pub struct ListReport {
    /// Roots of the declaration closure.
    pub declarations: Vec<String>,
    pub recipes: Vec<String>,
    /// Rendered discovery warnings.
    pub warnings: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(warning);
        }

        if self.declarations.is_empty() {
            out.preformatted("No declaration roots found");
        } else {
            out.section("Declaration roots");
            for name in &self.declarations {
                out.list_item(name);
            }
        }

        out.newline();
        if self.recipes.is_empty() {
            out.preformatted("No recipes found");
        } else {
            out.section("Recipes");
            for name in &self.recipes {
                out.list_item(name);
            }
        }
    }
}
