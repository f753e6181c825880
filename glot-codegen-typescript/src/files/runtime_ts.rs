//! Shared runtime imported by every adapter.

use std::path::{Path, PathBuf};

use glot_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{
    adapter::RUNTIME_MODULE,
    code_file::{CodeFile, RawCode},
};

const VISIT: &str = r#"/** Where the traversal is, plus a message map shared along it. */
export interface VisitContext {
  /** Node type names from the root to the current node. */
  readonly path: readonly string[];
  get<T>(key: string): T | undefined;
  put(key: string, value: unknown): void;
}

/** Returns a replacement node, or null/undefined to keep the visited one. */
export type VisitCallback<T> = (node: T, ctx: VisitContext) => T | null | undefined;

/** The host side of the bridge. */
export interface RecipeHost {
  construct(qualifiedName: string, args: readonly unknown[]): unknown;
}"#;

const OPTIONS: &str = r#"export type OptionValueType =
  | { type: "string" }
  | { type: "number" }
  | { type: "boolean" }
  | { type: "enum"; values: readonly string[] }
  | { type: "list"; element: OptionValueType }
  | { type: "host"; name: string };

export interface OptionDescriptor {
  name: string;
  displayName: string;
  description: string;
  example?: string;
  required: boolean;
  valueType: OptionValueType;
}

export interface RecipeDescriptor {
  name: string;
  displayName: string;
  description: string;
  options: readonly OptionDescriptor[];
}

export class OptionError extends Error {
  constructor(
    readonly recipe: string,
    readonly option: string,
    detail: string,
  ) {
    super(`${recipe}: option '${option}' ${detail}`);
    this.name = "OptionError";
  }
}

function matches(value: unknown, type: OptionValueType): boolean {
  switch (type.type) {
    case "string":
    case "number":
    case "boolean":
      return typeof value === type.type;
    case "enum":
      return typeof value === "string" && type.values.includes(value);
    case "list":
      return Array.isArray(value) && value.every((item) => matches(item, type.element));
    case "host":
      return typeof value === "object" && value !== null;
  }
}

function describe(type: OptionValueType): string {
  switch (type.type) {
    case "enum":
      return `one of ${type.values.join(", ")}`;
    case "list":
      return `a list of ${describe(type.element)}`;
    case "host":
      return `a ${type.name}`;
    default:
      return `a ${type.type}`;
  }
}

/**
 * Check options against a descriptor and return their values in
 * declaration order. Absent optional options become null.
 */
export function validateOptions(descriptor: RecipeDescriptor, options: object): unknown[] {
  const values = options as Record<string, unknown>;
  return descriptor.options.map((option) => {
    const value = values[option.name];
    if (value === undefined || value === null) {
      if (option.required) {
        throw new OptionError(descriptor.name, option.name, "is required");
      }
      return null;
    }
    if (!matches(value, option.valueType)) {
      throw new OptionError(descriptor.name, option.name, `must be ${describe(option.valueType)}`);
    }
    return value;
  });
}"#;

const VISITOR_TABLE: &str = r#"/** Visit callbacks keyed by host node type name. */
export class VisitorTable {
  private readonly callbacks = new Map<string, VisitCallback<unknown>>();

  register<T>(types: readonly string[], callback: VisitCallback<T>): void {
    for (const type of types) {
      this.callbacks.set(type, callback as unknown as VisitCallback<unknown>);
    }
  }

  has(typeName: string): boolean {
    return this.callbacks.has(typeName);
  }

  /** Run the callback for `typeName`; the node is kept unless it returns a replacement. */
  dispatch(typeName: string, node: unknown, ctx: VisitContext): unknown {
    const callback = this.callbacks.get(typeName);
    if (callback === undefined) {
      return node;
    }
    const result = callback(node, ctx);
    return result === null || result === undefined ? node : result;
  }
}"#;

/// `runtime.ts` in the adapter directory.
pub struct RuntimeTs<'a> {
    dir: &'a str,
}

impl<'a> RuntimeTs<'a> {
    pub fn new(dir: &'a str) -> Self {
        Self { dir }
    }
}

impl GeneratedFile for RuntimeTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.dir).join(format!("{RUNTIME_MODULE}.ts"))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add(RawCode::new(VISIT))
            .add(RawCode::new(OPTIONS))
            .add(RawCode::new(VISITOR_TABLE))
            .render()
    }
}
