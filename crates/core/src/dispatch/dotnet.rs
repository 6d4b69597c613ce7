use super::table::{Action, DecisionTable, Rule};
use crate::project::ProjectDir;
use crate::types::Mode;

pub const SDK_MISSING: &str = "dotnet SDK is not installed";

pub fn unit_table() -> DecisionTable<ProjectDir> {
    DecisionTable::new(vec![
        Rule::new(
            "dotnet on PATH",
            |p: &ProjectDir| p.find_executable("dotnet").is_some(),
            |_| Action::run("ASP.NET / .NET Core Test", "dotnet test"),
        ),
        Rule::new(
            "no sdk",
            |_| true,
            |_| Action::skip("ASP.NET Test", SDK_MISSING),
        ),
    ])
}

pub fn plan(project: &ProjectDir, mode: Mode) -> Vec<Action> {
    if !mode.includes_unit() {
        return Vec::new();
    }
    unit_table().evaluate(project).into_iter().collect()
}
