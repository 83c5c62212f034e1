//! Plain-text rendering of comparisons and listings.
//!
//! The terminal stands in for two columns: each column is printed as a
//! labelled section, basic first, then the strategy, then any intermediate
//! texts.

use std::io::{self, Write};

use framework_primitives::{Mode, ModelId, Strategy};
use framework_runner::RunReport;

const RULE_WIDTH: usize = 72;

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn section<W: Write>(out: &mut W, label: &str, body: &str) -> io::Result<()> {
    writeln!(out, "--- {label} ---")?;
    writeln!(out, "{body}")?;
    writeln!(out)
}

/// Writes a full comparison: prompts, outputs, then intermediate texts.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_report<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    let strategy = report.strategy().display_name();

    match report.mode() {
        Mode::Offline => heading(out, &format!("{strategy} (offline example)"))?,
        Mode::Online => {
            let settings = report.settings();
            heading(
                out,
                &format!(
                    "{strategy} (online, model {}, temperature {}, {} calls)",
                    settings.model,
                    settings.temperature,
                    report.calls()
                ),
            )?;
        }
    }

    section(out, "Basic Prompt", report.basic_prompt())?;
    section(out, &format!("{strategy} Prompt"), report.strategy_prompt())?;
    section(out, "Basic Output", &report.basic_output().display_text())?;
    section(
        out,
        &format!("{strategy} Output"),
        &report.strategy_output().display_text(),
    )?;

    if let Some(intermediate) = report.intermediate() {
        for (label, outcome) in intermediate.sections() {
            section(out, &label, &outcome.display_text())?;
        }
    }
    Ok(())
}

/// Writes the strategy list in display order.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_strategies<W: Write>(out: &mut W) -> io::Result<()> {
    for strategy in Strategy::ALL {
        let calls = match strategy {
            Strategy::SelfConsistency => "samples + consensus",
            Strategy::ReflectionRevision => "three chained calls",
            _ => "single call",
        };
        writeln!(
            out,
            "{:<22}{:<24}{calls}",
            strategy.slug(),
            strategy.display_name()
        )?;
    }
    Ok(())
}

/// Writes the allowed models, marking the defaults.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_models<W: Write>(out: &mut W) -> io::Result<()> {
    for model in ModelId::ALL {
        let mut notes = Vec::new();
        if model == ModelId::ONLINE_DEFAULT {
            notes.push("online default");
        }
        if model == ModelId::OFFLINE_DEFAULT {
            notes.push("offline examples");
        }
        if notes.is_empty() {
            writeln!(out, "{model}")?;
        } else {
            writeln!(out, "{:<16}({})", model.as_str(), notes.join(", "))?;
        }
    }
    Ok(())
}
