use super::table::{Action, DecisionTable, Rule};
use crate::project::ProjectDir;
use crate::types::Mode;

pub fn unit_table() -> DecisionTable<ProjectDir> {
    DecisionTable::new(vec![
        Rule::new(
            "pytest",
            |p: &ProjectDir| p.exists("pytest.ini") || p.find_executable("pytest").is_some(),
            |_| Action::run("Pytest (Python)", "pytest"),
        ),
        Rule::new(
            "unittest",
            |_| true,
            |_| Action::run("Python Unittest", "python3 -m unittest discover"),
        ),
    ])
}

pub fn plan(project: &ProjectDir, mode: Mode) -> Vec<Action> {
    if !mode.includes_unit() {
        return Vec::new();
    }
    unit_table().evaluate(project).into_iter().collect()
}
