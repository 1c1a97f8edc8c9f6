//! Command execution against a roster

use gradebook_core::{Roster, SortStrategy, StudentRecord};
use serde::Serialize;
use serde_json::json;

use crate::cli::Command;
use crate::config::GradebookConfig;
use crate::error::{CliError, Result};
use crate::render::Renderer;

/// Student removed by the demo sequence
pub const DEMO_REMOVED_STUDENT: &str = "Bob";

/// Output options resolved from flags and config
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub json: bool,
    pub strategy: SortStrategy,
    pub descending: bool,
    pub renderer: Renderer,
}

impl Options {
    pub fn from_config(config: &GradebookConfig, json: bool) -> Self {
        Self {
            json,
            strategy: config.sort.strategy,
            descending: config.sort.descending,
            renderer: Renderer::new(config.display.precision),
        }
    }
}

#[derive(Serialize)]
struct AverageRow<'a> {
    name: &'a str,
    average: f64,
}

fn average_rows(roster: &Roster) -> Vec<AverageRow<'_>> {
    roster
        .iter()
        .map(|s| AverageRow {
            name: s.name(),
            average: s.average(),
        })
        .collect()
}

/// Execute a command, returning the rendered output
pub fn execute(command: &Command, roster: &mut Roster, options: &Options) -> Result<String> {
    let render = &options.renderer;

    match command {
        Command::Demo => demo(roster, options),

        Command::List => {
            if options.json {
                return Ok(serde_json::to_string_pretty(&roster.list_students())?);
            }
            Ok(render.names(roster))
        }

        Command::Grades => {
            if options.json {
                let students: Vec<_> = roster
                    .iter()
                    .map(|s| {
                        json!({ "name": s.name(), "grades": s.grades(), "summary": s.summary() })
                    })
                    .collect();
                return Ok(serde_json::to_string_pretty(&students)?);
            }
            Ok(roster.iter().map(|s| render.student(s)).collect())
        }

        Command::Sort {
            strategy,
            descending,
        } => {
            let strategy = strategy.unwrap_or(options.strategy);
            roster.sort_by_average(strategy, descending.unwrap_or(options.descending));
            if options.json {
                return Ok(serde_json::to_string_pretty(&average_rows(roster))?);
            }
            Ok(render.averages(roster))
        }

        Command::Search { name } => {
            let matches = roster.search_by_name(name);
            if options.json {
                return Ok(serde_json::to_string_pretty(&matches)?);
            }
            Ok(render.search(name, &matches))
        }

        Command::Remove { name } => {
            let removed = roster.remove_student(name);
            if options.json {
                let value = json!({ "removed": removed, "students": roster.list_students() });
                return Ok(serde_json::to_string_pretty(&value)?);
            }
            Ok(match removed {
                Some(student) => {
                    format!("{} has been removed\n\n{}", student.name(), render.names(roster))
                }
                None => format!("No student with name {} found.\n", name),
            })
        }

        Command::DropLowest { name } => {
            let student = roster
                .find_mut(name)
                .ok_or_else(|| CliError::StudentNotFound(name.clone()))?;
            let dropped = student.drop_lowest_grade();
            drop_lowest_output(student, dropped, options)
        }

        Command::Stats => {
            let stats = roster.class_statistics();
            if options.json {
                return Ok(serde_json::to_string_pretty(&stats.summary)?);
            }
            Ok(render.class_statistics(&stats))
        }
    }
}

fn drop_lowest_output(
    student: &StudentRecord,
    dropped: Option<i32>,
    options: &Options,
) -> Result<String> {
    if options.json {
        let value = json!({ "dropped": dropped, "student": student });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(match dropped {
        Some(grade) => format!("Dropped {}\n{}", grade, options.renderer.student(student)),
        None => format!("Cannot drop lowest grade: {} has no grades.\n", student.name()),
    })
}

/// The full demo sequence: list, sort, remove, class statistics
fn demo(roster: &mut Roster, options: &Options) -> Result<String> {
    let render = &options.renderer;
    let direction = if options.descending { "descending" } else { "ascending" };

    let initial: Vec<String> = roster.list_students().iter().map(|s| s.to_string()).collect();
    roster.sort_by_average(options.strategy, options.descending);

    if options.json {
        let sorted = serde_json::to_value(average_rows(roster))?;
        let removed = roster.remove_student(DEMO_REMOVED_STUDENT).is_some();
        let value = json!({
            "students": initial,
            "sorted": sorted,
            "strategy": options.strategy,
            "descending": options.descending,
            "removed": removed,
            "remaining": roster.list_students(),
            "class": roster.class_statistics().summary,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = String::new();
    out.push_str("== Students ==\n");
    for name in &initial {
        out.push_str(name);
        out.push('\n');
    }

    out.push_str(&format!("\n== Sort by average ({}, {}) ==\n", direction, options.strategy));
    out.push_str(&render.averages(roster));

    out.push_str(&format!("\n== Remove {} ==\n", DEMO_REMOVED_STUDENT));
    match roster.remove_student(DEMO_REMOVED_STUDENT) {
        Some(student) => out.push_str(&format!("{} has been removed\n\n", student.name())),
        None => out.push_str(&format!(
            "No student with name {} found.\n",
            DEMO_REMOVED_STUDENT
        )),
    }
    out.push_str(&render.names(roster));

    out.push_str("\n== Class stats ==\n");
    out.push_str(&render.class_statistics(&roster.class_statistics()));

    Ok(out)
}
