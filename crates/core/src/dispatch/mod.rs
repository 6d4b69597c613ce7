//! Per-ecosystem decision tables mapping a project and a mode to test commands

pub mod dotnet;
pub mod node;
pub mod php;
pub mod python;
pub mod table;

pub use table::{Action, DecisionTable, Rule};

use tracing::debug;

use crate::error::Result;
use crate::project::ProjectDir;
use crate::types::{Ecosystem, Mode};

/// Actions for one ecosystem, in table order (unit branch before e2e)
pub fn plan(ecosystem: Ecosystem, project: &ProjectDir, mode: Mode) -> Result<Vec<Action>> {
    let actions = match ecosystem {
        Ecosystem::Php => php::plan(project, mode),
        Ecosystem::Node => node::plan(project, mode)?,
        Ecosystem::DotNet => dotnet::plan(project, mode),
        Ecosystem::Python => python::plan(project, mode),
    };

    debug!("Planned {} action(s) for {} in {} mode", actions.len(), ecosystem, mode);
    Ok(actions)
}
