//! Doctor module for content-mcp diagnostics
//!
//! Checks the environment the server reads its configuration from, then
//! tries to load the `Document` classes from the configured repository.
//!
//! # Usage
//!
//! ```no_run
//! use content_mcp_cli::doctor::Doctor;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut doctor = Doctor::new();
//! let exit_code = doctor.run_diagnostics().await?;
//! # Ok(())
//! # }
//! ```
//!
//! The doctor returns exit codes:
//! - 0: All checks passed
//! - 1: Some warnings detected
//! - 2: Errors detected

use anyhow::Result;
use colored::*;

pub use types::*;

pub mod checks;
pub mod types;
pub mod utils;

/// Accumulates diagnostic results and prints a summary
pub struct Doctor {
    checks: Vec<Check>,
}

impl Doctor {
    /// Create a new Doctor instance for running diagnostics
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Checks collected so far
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Run all diagnostic checks and print the report
    ///
    /// # Returns
    ///
    /// - 0: All checks passed
    /// - 1: Warnings detected
    /// - 2: Errors detected
    pub async fn run_diagnostics(&mut self) -> Result<i32> {
        println!("{}", "content-mcp Doctor".bold().blue());
        println!("{}", "Running diagnostics...".dimmed());
        println!();

        self.run_environment_checks()?;
        checks::check_repository(&mut self.checks).await?;

        self.print_results();

        Ok(self.get_exit_code())
    }

    fn run_environment_checks(&mut self) -> Result<()> {
        checks::check_required_variables(&mut self.checks)?;
        checks::check_optional_settings(&mut self.checks)?;
        checks::check_in_path(&mut self.checks)?;
        checks::check_log_directory(&mut self.checks)?;
        Ok(())
    }

    /// Print the results grouped by category, then a summary
    pub fn print_results(&self) {
        let use_color = crate::cli::Cli::should_use_color();

        self.print_check_category(CheckCategory::Environment, "Environment:", use_color);
        self.print_check_category(CheckCategory::Repository, "Repository:", use_color);

        self.print_summary(use_color);
    }

    fn print_check_category(&self, category: CheckCategory, category_name: &str, use_color: bool) {
        let checks: Vec<&Check> = self
            .checks
            .iter()
            .filter(|c| c.category == category)
            .collect();
        if checks.is_empty() {
            return;
        }

        if use_color {
            println!("{}", category_name.bold().yellow());
        } else {
            println!("{category_name}");
        }
        for check in checks {
            print_check(check, use_color);
        }
        println!();
    }

    fn print_summary(&self, use_color: bool) {
        let counts = self.count_check_statuses();
        let paint = |n: usize, color: Color| {
            if use_color {
                n.to_string().color(color).to_string()
            } else {
                n.to_string()
            }
        };

        let mut line = format!("{} checks passed", paint(counts.ok_count, Color::Green));
        if counts.warning_count > 0 || counts.error_count > 0 {
            line.push_str(&format!(
                ", {} warnings",
                paint(counts.warning_count, Color::Yellow)
            ));
        }
        if counts.error_count > 0 {
            line.push_str(&format!(", {} errors", paint(counts.error_count, Color::Red)));
        }

        if use_color {
            println!("{}", "Summary:".bold().green());
        } else {
            println!("Summary:");
        }
        println!("  {line}");
    }

    fn count_check_statuses(&self) -> CheckCounts {
        let count = |status: CheckStatus| self.checks.iter().filter(|c| c.status == status).count();
        CheckCounts {
            ok_count: count(CheckStatus::Ok),
            warning_count: count(CheckStatus::Warning),
            error_count: count(CheckStatus::Error),
        }
    }

    /// Exit code for the collected checks
    ///
    /// Errors win over warnings.
    pub fn get_exit_code(&self) -> i32 {
        let has_error = self.checks.iter().any(|c| c.status == CheckStatus::Error);
        let has_warning = self.checks.iter().any(|c| c.status == CheckStatus::Warning);

        let exit_code = if has_error {
            ExitCode::Error
        } else if has_warning {
            ExitCode::Warning
        } else {
            ExitCode::Success
        };

        exit_code.into()
    }
}

impl Default for Doctor {
    fn default() -> Self {
        Self::new()
    }
}

fn print_check(check: &Check, use_color: bool) {
    let (symbol, color_fn): (&str, fn(&str) -> ColoredString) = match check.status {
        CheckStatus::Ok => ("✓", |s: &str| s.green()),
        CheckStatus::Warning => ("⚠", |s: &str| s.yellow()),
        CheckStatus::Error => ("✗", |s: &str| s.red()),
    };

    if use_color {
        println!(
            "  {} {} - {}",
            color_fn(symbol),
            check.name.bold(),
            check.message
        );
    } else {
        println!("  {} {} - {}", symbol, check.name, check.message);
    }

    if let Some(fix) = &check.fix {
        for (i, line) in fix.lines().enumerate() {
            let arrow = if i == 0 { "→" } else { " " };
            if use_color {
                println!("    {} {}", arrow.dimmed(), line.dimmed());
            } else {
                println!("    {arrow} {line}");
            }
        }
    }
}
