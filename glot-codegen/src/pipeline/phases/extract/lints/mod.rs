//! Built-in recipe schema lints.

mod duplicate_option;
mod empty_description;
mod option_type;
mod recipe_metadata;
mod required_example;
mod visitor_target;

pub use duplicate_option::DuplicateOptionLint;
pub use empty_description::EmptyOptionDescriptionLint;
pub use option_type::OptionTypeLint;
pub use recipe_metadata::RecipeMetadataLint;
pub use required_example::RequiredExampleLint;
pub use visitor_target::VisitorTargetLint;
