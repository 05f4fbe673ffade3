//! domebrick CLI - brick dome template generator
//!
//! Solves the cross-section of a masonry dome and writes a printable SVG
//! template sheet, optionally with a JSON course report.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use domebrick_solver::{solve_plan, CourseMarks, DomeParams, DomePlan};
use domebrick_template::{render, sheet_origin};

#[derive(Parser)]
#[command(name = "domebrick")]
#[command(about = "Generate brick cutting templates for a masonry dome", long_about = None)]
struct Cli {
    /// Print scale of the template sheet (3.78 is 1mm per SVG unit at 96dpi)
    #[arg(long, default_value_t = 3.78)]
    scale: f64,

    /// Brick length along the course, mm
    #[arg(long, default_value_t = 250.0)]
    brick_width: f64,

    /// Brick bed height, mm
    #[arg(long, default_value_t = 65.0)]
    brick_height: f64,

    /// Brick depth across the wall, mm
    #[arg(long, default_value_t = 125.0)]
    brick_depth: f64,

    /// Inner radius of the dome at the surface, mm
    #[arg(long, default_value_t = 503.0)]
    inner_radius: f64,

    /// Apex height of the inner surface, mm
    #[arg(long, default_value_t = 440.0)]
    height: f64,

    /// Height of the soldier course, mm
    #[arg(long, default_value_t = 125.0)]
    first_row_height: f64,

    /// Mortar seam, mm
    #[arg(long, default_value_t = 4.0)]
    seam: f64,

    /// TOML parameter file; takes precedence over the dimension flags
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output SVG file
    #[arg(long, default_value = "dome.svg")]
    out: PathBuf,

    /// Also write the course table as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn params(&self) -> Result<DomeParams> {
        if let Some(path) = &self.params {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            return toml::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()));
        }
        Ok(DomeParams {
            brick_width: self.brick_width,
            brick_height: self.brick_height,
            brick_depth: self.brick_depth,
            inner_radius: self.inner_radius,
            height: self.height,
            first_row_height: self.first_row_height,
            seam: self.seam,
        })
    }
}

/// Machine-readable summary of a solved dome.
#[derive(Serialize)]
struct Report<'a> {
    params: &'a DomeParams,
    dome_radius: f64,
    soldier_bricks: usize,
    bricks_per_course: usize,
    courses: Vec<&'a CourseMarks>,
}

impl<'a> Report<'a> {
    fn from_plan(plan: &'a DomePlan) -> Self {
        Report {
            params: &plan.params,
            dome_radius: plan.profile.radius,
            soldier_bricks: plan.soldier_outer.count(),
            bricks_per_course: plan.bricks_per_course,
            courses: plan.courses.iter().map(|c| &c.marks).collect(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cli = Cli::parse();

    let params = cli.params()?;
    let plan = solve_plan(&params, &sheet_origin(&params))?;
    tracing::info!(
        courses = plan.courses.len(),
        bricks_per_course = plan.bricks_per_course,
        dome_radius = plan.profile.radius,
        "dome solved"
    );

    let doc = render(&plan, cli.scale);
    doc.export(&cli.out)
        .with_context(|| format!("writing {}", cli.out.display()))?;
    tracing::info!(out = %cli.out.display(), "template sheet written");

    if let Some(path) = &cli.report {
        let report = Report::from_plan(&plan);
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(report = %path.display(), "course report written");
    }

    Ok(())
}
