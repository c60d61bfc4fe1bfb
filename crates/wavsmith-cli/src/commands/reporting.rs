//! Colored terminal output shared by commands.

use colored::Colorize;
use wavsmith_backend_audio::RenderReport;
use wavsmith_spec::{ValidationError, ValidationResult, ValidationWarning};

/// Prints validation errors and warnings, one per line.
pub(crate) fn print_validation(result: &ValidationResult) {
    print_errors(&result.errors);
    print_warnings(&result.warnings);
}

pub(crate) fn print_errors(errors: &[ValidationError]) {
    for error in errors {
        println!("  {} {}", "✗".red(), error);
    }
}

pub(crate) fn print_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}

/// Prints a render summary.
pub(crate) fn print_report(report: &RenderReport) {
    println!(
        "  {} {} ch @ {} Hz, {}-bit, {} frames ({:.3}s)",
        "✓".green(),
        report.channels,
        report.sample_rate,
        report.bit_depth,
        report.frames,
        report.duration_seconds
    );
    if report.clamped_samples > 0 {
        println!(
            "  {} {} sample(s) clamped (peak {:.3})",
            "!".yellow(),
            report.clamped_samples,
            report.peak
        );
    }
    println!("{} {}", "PCM hash:".dimmed(), report.pcm_hash);
}
