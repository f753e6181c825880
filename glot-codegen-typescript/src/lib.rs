//! TypeScript generator for glot.
//!
//! Renders the results of a generation pass as TypeScript: one `.d.ts`
//! declaration file for the resolved type closure, and one adapter module
//! per recipe that a guest script imports to construct the recipe and
//! register visitors.
//!
//! # Usage
//!
//! ```ignore
//! use glot_codegen::{language::LanguageCodegen, pipeline::Pipeline};
//! use glot_codegen_typescript::Generator;
//!
//! let ctx = Pipeline::new().run(config, model)?;
//! let generator = Generator::from_context(&ctx)?;
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("generated"))?;
//! ```
//!
//! # Generated Output
//!
//! - `types.d.ts` - declarations, in dependency order
//! - `adapters/runtime.ts` - option validation and visitor dispatch
//! - `adapters/<recipe>.ts` - one adapter per recipe

mod adapter;
mod code_file;
mod declarations;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use adapter::{AdapterEmitter, RenderedAdapters};
pub use code_file::{CodeFile, RawCode};
pub use declarations::{DeclarationEmitter, EmittedDeclarations};
pub use generator::Generator;
pub use glot_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use naming::TS_NAMING;
pub use type_mapper::TypeScriptTypeMapper;
