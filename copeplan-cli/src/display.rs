//! Terminal output helpers

use console::style;
use copeplan_core::{BackupSummary, PlanPayload};
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", style("→").cyan(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), msg);
}

#[derive(Tabled)]
struct AdultRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Primary")]
    primary: &'static str,
}

#[derive(Tabled)]
struct CrisisRow {
    #[tabled(rename = "Resource")]
    name: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Notes")]
    description: String,
}

/// Prints the whole plan.
pub fn plan(plan: &PlanPayload) {
    println!("{}", style(format!("{}'s plan", plan.patient_nickname)).bold());
    println!();

    println!("{}", style("Coping skills").underlined());
    if plan.selected_skills.is_empty() {
        println!("  (none yet)");
    }
    for skill in &plan.selected_skills {
        match &skill.fill_in {
            Some(fill_in) => println!("  • {} ({})", skill.skill_id, fill_in),
            None => println!("  • {}", skill.skill_id),
        }
    }
    println!();

    println!("{}", style("Supportive adults").underlined());
    if plan.supportive_adults.is_empty() {
        println!("  (none yet)");
    } else {
        let rows = plan.supportive_adults.iter().map(|a| AdultRow {
            name: a.name.clone(),
            contact: a.contact.clone(),
            primary: if a.is_primary { "yes" } else { "" },
        });
        println!("{}", Table::new(rows).with(Style::rounded()));
    }
    println!();

    println!("{}", style("Ways to ask for help").underlined());
    if plan.help_methods.is_empty() {
        println!("  (none yet)");
    }
    for method in &plan.help_methods {
        match &method.custom_text {
            Some(text) => println!("  • {}: {}", method.method_id, text),
            None => println!("  • {}", method.method_id),
        }
    }
    println!();

    if !plan.crisis_resources.is_empty() {
        println!("{}", style("If you are in crisis").red().bold());
        let rows = plan.crisis_resources.iter().map(|r| CrisisRow {
            name: r.name.clone(),
            contact: r.contact.clone(),
            description: r.description.clone().unwrap_or_default(),
        });
        println!("{}", Table::new(rows).with(Style::rounded()));
    }
}

/// Prints what is known about a backup without decrypting it.
pub fn backup_summary(summary: &BackupSummary) {
    println!("  Format version: {}", summary.format_version.number());
    println!("  Key derivation: {}", summary.kdf);
    println!("  Cipher:         {}", summary.cipher);
    println!("  Fingerprint:    {}", summary.fingerprint);
    println!("  Encrypted size: {} bytes", summary.ciphertext_len);
}
