use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::Commands;
use gradebook_api::Settings;
use gradebook_core::AggregationEngine;
use gradebook_report::{Report, ReportBuilder};

pub async fn execute(command: Commands, mut settings: Settings) -> Result<()> {
    match command {
        Commands::Students { json } => {
            let engine = connect(&settings)?;
            let averages = engine.get_student_averages().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&averages)?);
            } else {
                let rows: Vec<_> = averages
                    .iter()
                    .map(|a| (a.student_name.as_str(), a.average_grade))
                    .collect();
                print!("{}", render_table("Student Name", &rows));
            }
        }

        Commands::Courses { json } => {
            let engine = connect(&settings)?;
            let averages = engine.get_course_averages().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&averages)?);
            } else {
                let rows: Vec<_> = averages
                    .iter()
                    .map(|a| (a.course_name.as_str(), a.average_grade))
                    .collect();
                print!("{}", render_table("Course Name", &rows));
            }
        }

        Commands::Export { output_dir } => {
            let engine = connect(&settings)?;
            let averages = engine.get_student_averages().await?;
            let report = ReportBuilder::new().build(&averages)?;

            let path = write_report(&report, &output_dir)?;
            println!("✓ Report written: {}", path.display());
            println!("  Students: {}", averages.len());
        }

        Commands::Serve { host, port } => {
            if let Some(host) = host {
                settings.host = host;
            }
            if let Some(port) = port {
                settings.port = port;
            }

            gradebook_api::serve(&settings).await?;
        }
    }

    Ok(())
}

/// Layered settings, with an explicit `--database-url` taking precedence
pub fn load_settings(config: Option<&Path>, database_url: Option<String>) -> Result<Settings> {
    let mut settings = Settings::load(config)?;
    if database_url.is_some() {
        settings.database_url = database_url;
    }
    Ok(settings)
}

fn connect(settings: &Settings) -> Result<AggregationEngine> {
    let store = gradebook_db::connect(settings.database_url()?, &settings.pool_settings())?;
    Ok(AggregationEngine::new(store))
}

/// Save the report under its own filename inside `dir`
pub fn write_report(report: &Report, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(&report.filename);
    std::fs::write(&path, report.bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = report.bytes().len(), "Saved grades report");

    Ok(path)
}

/// Two-column text table with the averages to two decimals.
pub fn render_table(name_header: &str, rows: &[(&str, f64)]) -> String {
    let width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once(name_header.chars().count()))
        .max()
        .unwrap_or_default();

    let mut out = format!("{:<width$}  {:>13}\n", name_header, "Average Grade", width = width);
    for (name, average) in rows {
        out.push_str(&format!("{:<width$}  {:>13.2}\n", name, average, width = width));
    }
    out
}
