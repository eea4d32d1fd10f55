// organelle.rs - GetOrganelle database preparation

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

use crate::process::{CommandRunner, CommandSpec};

pub const GET_ORGANELLE_CONFIG: &str = "get_organelle_config.py";

/// Selects every database in `--add`
pub const ALL_DATABASES: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrganelleDatabase {
    EmbplantPt,
    EmbplantMt,
    EmbplantNr,
    FungusMt,
    FungusNr,
    #[default]
    AnimalMt,
    OtherPt,
}

impl OrganelleDatabase {
    pub const ALL: [OrganelleDatabase; 7] = [
        OrganelleDatabase::EmbplantPt,
        OrganelleDatabase::EmbplantMt,
        OrganelleDatabase::EmbplantNr,
        OrganelleDatabase::FungusMt,
        OrganelleDatabase::FungusNr,
        OrganelleDatabase::AnimalMt,
        OrganelleDatabase::OtherPt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrganelleDatabase::EmbplantPt => "embplant_pt",
            OrganelleDatabase::EmbplantMt => "embplant_mt",
            OrganelleDatabase::EmbplantNr => "embplant_nr",
            OrganelleDatabase::FungusMt => "fungus_mt",
            OrganelleDatabase::FungusNr => "fungus_nr",
            OrganelleDatabase::AnimalMt => "animal_mt",
            OrganelleDatabase::OtherPt => "other_pt",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|db| db.as_str()).collect()
    }
}

impl Display for OrganelleDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganelleDatabase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|db| db.as_str() == s.trim())
            .ok_or_else(|| {
                format!(
                    "Invalid organelle database '{}'. Available: {}",
                    s,
                    Self::names().join(", ")
                )
            })
    }
}

/// `--add` value: a database name or `all`
pub fn parse_database_choice(value: &str) -> Result<String, String> {
    if value == ALL_DATABASES {
        return Ok(value.to_string());
    }
    OrganelleDatabase::from_str(value).map(|db| db.as_str().to_string())
}

/// Expand `all`, drop duplicates keeping the first occurrence; nothing requested means animal_mt
pub fn expand_requested(choices: &[String]) -> Result<Vec<OrganelleDatabase>, String> {
    if choices.is_empty() {
        return Ok(vec![OrganelleDatabase::default()]);
    }
    if choices.iter().any(|c| c == ALL_DATABASES) {
        return Ok(OrganelleDatabase::ALL.to_vec());
    }

    let mut databases = Vec::new();
    for choice in choices {
        let database = OrganelleDatabase::from_str(choice)?;
        if !databases.contains(&database) {
            databases.push(database);
        }
    }
    Ok(databases)
}

/// Database names from `get_organelle_config.py --list`: first token of each non-empty line
pub fn parse_configured(listing: &str) -> BTreeSet<String> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(|name| name.to_string())
        .collect()
}

/// Interactive yes/no question
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool, String>;
}

#[derive(Debug, Default)]
pub struct PrepareReport {
    pub configured: BTreeSet<String>,
    pub added: Vec<OrganelleDatabase>,
    pub skipped: Vec<OrganelleDatabase>,
    /// Databases whose `--add` run exited non-zero, with the status
    pub failed: Vec<(OrganelleDatabase, i32)>,
}

impl PrepareReport {
    /// First non-zero status of the external tool, or 0
    pub fn exit_code(&self) -> i32 {
        self.failed.first().map(|(_, status)| *status).unwrap_or(0)
    }
}

pub struct OrganellePreparer<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
}

impl<'a> OrganellePreparer<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            runner,
            program: GET_ORGANELLE_CONFIG.to_string(),
        }
    }

    /// Currently configured databases
    pub fn configured(&self) -> Result<BTreeSet<String>, String> {
        let command = CommandSpec::new(&self.program, ["--list"]);
        let output = self.runner.run(&command)?;

        if !output.success() {
            log::warn!("'{}' exited with status {}", command, output.status);
            if !output.text.is_empty() {
                eprintln!("{}", output.text);
            }
            return Ok(BTreeSet::new());
        }

        let configured = parse_configured(&output.text);
        if configured.is_empty() {
            println!("⚠️  no configured databases");
        } else {
            println!("📋 configured databases:\n{}", output.text);
        }
        Ok(configured)
    }

    pub fn prepare(
        &self,
        requested: &[String],
        list_only: bool,
        confirm: &mut dyn Confirm,
    ) -> Result<PrepareReport, String> {
        let mut report = PrepareReport {
            configured: self.configured()?,
            ..Default::default()
        };
        if list_only {
            return Ok(report);
        }

        for database in expand_requested(requested)? {
            if report.configured.contains(database.as_str()) {
                let prompt = format!("\"{}\" already configured, overwrite it?", database);
                if !confirm.confirm(&prompt)? {
                    report.skipped.push(database);
                    continue;
                }
            }

            let status = self.add(database)?;
            if status == 0 {
                report.added.push(database);
            } else {
                log::warn!("adding {} exited with status {}", database, status);
                report.failed.push((database, status));
            }
        }

        Ok(report)
    }

    fn add(&self, database: OrganelleDatabase) -> Result<i32, String> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("preparing database for GetOrganelle: {}", database));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let command = CommandSpec::new(&self.program, ["--add", database.as_str()]);
        let result = self.runner.run(&command);
        spinner.finish_and_clear();

        let output = result?;
        println!("🧬 {}", database);
        if !output.text.is_empty() {
            println!("{}", output.text);
        }
        Ok(output.status)
    }
}
