use anyhow::Result;
use testpilot_core::{Action, Mode, ProjectDir, plan_only};
use tracing::debug;

use crate::display::NO_TESTS_NOTICE;

pub fn plan_command(project: &ProjectDir, mode: Mode) -> Result<i32> {
    println!("🔍 Detecting project environment...");

    let plans = plan_only(project, mode);
    debug!("Planned {} ecosystem(s)", plans.len());

    if plans.iter().all(|(_, plan)| plan.as_ref().is_ok_and(Vec::is_empty)) {
        println!("{NO_TESTS_NOTICE}");
        return Ok(0);
    }

    println!("📋 Planned test commands (mode: {mode})");
    for (ecosystem, plan) in plans {
        println!("   {ecosystem}");
        match plan {
            Ok(actions) if actions.is_empty() => println!("      • nothing to run"),
            Ok(actions) => {
                for action in actions {
                    match action {
                        Action::Run { label, command } => {
                            println!("      • {label}: {command}")
                        }
                        Action::Skip { label, reason } => {
                            println!("      ⏭️ {label}: skipped ({reason})")
                        }
                    }
                }
            }
            Err(e) => println!("      ❌ {e}"),
        }
    }

    Ok(0)
}
