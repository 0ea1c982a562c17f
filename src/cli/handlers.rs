// src/cli/handlers.rs
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use inquire::Confirm;

use crate::generators::{PassphraseGenerator, PasswordGenerator, Wordlist};
use crate::models::{
    CharacterClasses, CredentialKind, GeneratedCredential, PassphraseOptions, PasswordGenerationOptions,
    StrengthCategory, StrengthReport,
};
use crate::store::{CredentialStore, ExportFormat};
use crate::strength::StrengthAnalyzer;

// Handlers for CLI commands

pub fn handle_generate_password(
    options: &PasswordGenerationOptions,
    save_as: Option<&str>,
    store_path: &Path,
    json: bool,
) -> Result<()> {
    let credential = PasswordGenerator::new()
        .generate_password(options)
        .context("Failed to generate password")?;
    finish_generation(credential, save_as, store_path, json)
}

pub fn handle_generate_passphrase(
    wordlist: Wordlist,
    options: &PassphraseOptions,
    save_as: Option<&str>,
    store_path: &Path,
    json: bool,
) -> Result<()> {
    let credential = PassphraseGenerator::new(wordlist)
        .generate_passphrase(options)
        .context("Failed to generate passphrase")?;
    finish_generation(credential, save_as, store_path, json)
}

pub fn handle_analyze(text: &str, json: bool) -> Result<()> {
    let report = StrengthAnalyzer::new().analyze(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

pub fn handle_save(
    store_path: &Path,
    name: &str,
    secret: &str,
    kind: Option<CredentialKind>,
) -> Result<()> {
    let mut store = open_store(store_path)?;
    store
        .add_with_kind(name, secret, kind)
        .context("Failed to save password")?;
    println!("✅ Password saved successfully!");
    Ok(())
}

pub fn handle_list(store_path: &Path, json: bool) -> Result<()> {
    let store = open_store(store_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.list_all())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No saved passwords.");
        return Ok(());
    }

    for (index, record) in store.list_all().iter().enumerate() {
        println!(
            "[{}] {} - {} ({})",
            index,
            style(&record.name).bold(),
            record.secret,
            record.date_string()
        );
    }
    Ok(())
}

pub fn handle_delete(store_path: &Path, index: usize, skip_confirm: bool) -> Result<()> {
    let mut store = open_store(store_path)?;

    let Some(record) = store.get(index) else {
        anyhow::bail!("No saved password at index {}", index);
    };

    let prompt = format!("Delete the saved password '{}'?", record.name);
    if !skip_confirm && !confirm(&prompt)? {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = store.delete_at(index).context("Failed to delete password")?;
    println!("🗑️  Deleted '{}'", removed.name);
    Ok(())
}

pub fn handle_clear(store_path: &Path, skip_confirm: bool) -> Result<()> {
    let mut store = open_store(store_path)?;

    if !skip_confirm && !confirm("Are you sure you want to delete ALL saved passwords?")? {
        println!("Cancelled.");
        return Ok(());
    }

    store.delete_all().context("Failed to clear passwords")?;
    println!("🗑️  All saved passwords deleted");
    Ok(())
}

pub fn handle_export(store_path: &Path, path: &Path, format: Option<ExportFormat>) -> Result<()> {
    let store = open_store(store_path)?;

    let written = match format {
        Some(format) => {
            store.export(path, format).context("Failed to export passwords")?;
            path.to_path_buf()
        }
        None => store.export_inferred(path).context("Failed to export passwords")?,
    };

    println!("📤 Exported {} passwords to {}", store.len(), written.display());
    Ok(())
}

/// Character classes from the command-line toggles layered over the defaults.
pub fn resolve_classes(
    defaults: CharacterClasses,
    no_uppercase: bool,
    no_lowercase: bool,
    no_digits: bool,
    symbols: bool,
    no_symbols: bool,
) -> CharacterClasses {
    CharacterClasses {
        uppercase: defaults.uppercase && !no_uppercase,
        lowercase: defaults.lowercase && !no_lowercase,
        digits: defaults.digits && !no_digits,
        symbols: (defaults.symbols || symbols) && !no_symbols,
    }
}

fn finish_generation(
    credential: GeneratedCredential,
    save_as: Option<&str>,
    store_path: &Path,
    json: bool,
) -> Result<()> {
    let report = StrengthAnalyzer::new().analyze(&credential.text);

    if let Some(name) = save_as {
        let mut store = open_store(store_path)?;
        store
            .add_with_kind(name, &credential.text, Some(credential.kind))
            .context("Failed to save password")?;
    }

    if json {
        let output = serde_json::json!({
            "credential": credential,
            "strength": report,
            "saved_as": save_as,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("🔑 {}", style(&credential.text).bold());
    print_report(&report);
    if let Some(name) = save_as {
        println!("💾 Saved as '{}'", name);
    }
    Ok(())
}

fn print_report(report: &StrengthReport) {
    let label = format!("{} ({}%)", report.category, report.score);
    let label = match report.category {
        StrengthCategory::VeryWeak | StrengthCategory::Weak => style(label).red(),
        StrengthCategory::Moderate => style(label).yellow(),
        StrengthCategory::Strong => style(label).green(),
        StrengthCategory::VeryStrong => style(label).cyan(),
        StrengthCategory::ExtremelyStrong => style(label).magenta(),
    };

    println!("📊 Strength: {}", label);
    println!("   Entropy: {:.1} bits", report.entropy_bits);
    println!("   Estimated crack time: {}", report.crack_time);
}

fn open_store(path: &Path) -> Result<CredentialStore> {
    CredentialStore::open(path)
        .with_context(|| format!("Failed to load saved passwords from {}", path.display()))
}

fn confirm(prompt: &str) -> Result<bool> {
    let answer = Confirm::new(prompt).with_default(false).prompt()?;
    Ok(answer)
}
