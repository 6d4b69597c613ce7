use super::table::{Action, DecisionTable, Rule};
use crate::project::ProjectDir;
use crate::types::Mode;

pub const MISSING_TESTS_DIR: &str = "'tests' directory does not exist";

const ARTISAN: &str = "artisan";
const PEST: &str = "vendor/bin/pest";
const PHPUNIT: &str = "vendor/bin/phpunit";

pub fn unit_table() -> DecisionTable<ProjectDir> {
    DecisionTable::new(vec![
        Rule::new(
            "artisan with tests",
            |p: &ProjectDir| p.exists(ARTISAN) && p.has_dir("tests"),
            |_| Action::run("Laravel Artisan Test", "php artisan test"),
        ),
        Rule::new(
            "artisan without tests",
            |p: &ProjectDir| p.exists(ARTISAN),
            |_| Action::skip("Laravel Artisan Test", MISSING_TESTS_DIR),
        ),
        Rule::new(
            "pest",
            |p: &ProjectDir| p.exists(PEST),
            |_| Action::run("Pest PHP", format!("{PEST} --parallel")),
        ),
        Rule::new(
            "phpunit with tests",
            |p: &ProjectDir| p.exists(PHPUNIT) && p.has_dir("tests"),
            |_| Action::run("PHPUnit", PHPUNIT),
        ),
        Rule::new(
            "phpunit without tests",
            |p: &ProjectDir| p.exists(PHPUNIT),
            |_| Action::skip("PHPUnit", MISSING_TESTS_DIR),
        ),
    ])
}

pub fn plan(project: &ProjectDir, mode: Mode) -> Vec<Action> {
    if !mode.includes_unit() {
        return Vec::new();
    }
    unit_table().evaluate(project).into_iter().collect()
}
