//! # TS CLI
//!
//! An interactive CLI that scaffolds TypeScript projects: it creates the project
//! directory, bootstraps `package.json` and the compiler through npm, lets the user
//! pick optional tooling, and wires that tooling into the generated manifest.
//!
//! ## Features
//!
//! - **Opinionated `tsconfig.json`** - Strict flags, `lib` output and a `src/*` path alias
//! - **ESLint** - TypeScript parser and plugin, with an `eslint` script
//! - **Prettier** - Formatter config and a `prettier` script
//! - **CZ** - Commitizen prompts plus commitlint enforcement on `commit-msg`
//! - **Git hooks** - husky and lint-staged, set up from whatever was selected
//! - **Dev runner** - `npm run dev` through ts-node-dev
//!
//! ## Quick Start
//!
//! ```bash
//! ts-cli create my-app
//! cd my-app
//! npm run dev
//! ```
//!
//! ## Module Structure
//!
//! - [`commands`] - The `create` sequence
//! - [`features`] - Feature catalog, installers, hooks and build script
//! - [`manifest`] - JSON helpers, `package.json` editing and the fixed `tsconfig.json`
//! - [`project`] - The generated project and the tool invocations scoped to it
//! - [`process`] - Real external process execution
//! - [`selection`] - Abstracts interactive selection prompts for testability
//! - [`output`] - Abstracts console output for testability
//! - [`traits`] - Defines the CommandRunner trait for testability and abstraction
//! - [`config`] - Optional `~/.ts-cli.toml` naming the npm/npx executables
//! - [`git`] - Repository initialization using git2 crate
//! - [`error`] - Error taxonomy and exit codes
//! - [`logging`] - Diagnostic logging controlled by `TS_CLI_LOG`

pub mod commands;
pub mod config;
pub mod error;
pub mod features;
pub mod git;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod process;
pub mod project;
pub mod selection;
pub mod traits;

pub use anyhow::Result;
