//! CLI command implementations.
//!
//! Commands are thin: they load the config, open the register, call one
//! library operation, and print. All policy (validation, write-through,
//! filtering, styling) lives below this layer.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::export;
use crate::observability::Logger;
use crate::query::{filter, search, FilterCriteria};
use crate::register::{DocumentRegister, RegisterError};
use crate::schema::{Discipline, DocumentRecord, RecordId, Status, DATE_FORMAT};
use crate::session::EditSession;
use crate::store::RegisterStore;

use super::args::{Command, FieldArgs};
use super::errors::{CliError, CliResult};
use super::output;

/// Configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the backing CSV file, relative to the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    "documents.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CliError::NotInitialized(path.to_path_buf()))
            }
            Err(e) => return Err(CliError::config(format!("failed to read config: {}", e))),
        };

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(CliError::config("data_file must not be empty"));
        }
        Ok(())
    }
}

/// Dispatches the parsed command.
pub fn execute(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => cmd_init(&config),
        Command::Add { config, fields } => cmd_add(&config, fields),
        Command::List { config, json } => cmd_list(&config, json),
        Command::Search { config, keyword } => cmd_search(&config, &keyword),
        Command::Filter {
            config,
            status,
            discipline,
            originator,
            doc_ref,
        } => cmd_filter(&config, status, discipline, originator, doc_ref),
        Command::Edit { config, id, fields } => cmd_edit(&config, RecordId(id), fields),
        Command::Delete { config, id } => cmd_delete(&config, RecordId(id)),
        Command::ExportCsv { config, output } => cmd_export_csv(&config, &output),
        Command::ExportReport { config, output } => cmd_export_report(&config, &output),
    }
}

fn open_register(config_path: &Path) -> CliResult<DocumentRegister> {
    let config = Config::load(config_path)?;
    Ok(DocumentRegister::open(RegisterStore::new(&config.data_file))?)
}

fn cmd_init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(config_path.to_path_buf()));
    }

    let config = Config::default();
    fs::write(config_path, serde_json::to_string_pretty(&config)?)
        .map_err(|e| CliError::config(format!("failed to write config: {}", e)))?;

    // Seed the backing file with its header so a fresh register loads clean.
    let store = RegisterStore::new(&config.data_file);
    if !store.path().exists() {
        store.save(&[])?;
    }

    Logger::info(
        "REGISTER_INITIALIZED",
        &[
            ("config", &config_path.display().to_string()),
            ("data_file", &config.data_file),
        ],
    );
    println!("Initialized register (config: {})", config_path.display());
    Ok(())
}

fn cmd_add(config_path: &Path, fields: FieldArgs) -> CliResult<()> {
    let mut register = open_register(config_path)?;

    // Delivery date defaults to today when the flag is absent; an explicit
    // empty flag stays empty and fails validation like any missing field.
    let delivery_date = match fields.delivery_date.as_deref() {
        None => Some(Local::now().date_naive()),
        Some(input) => parse_date_flag(input, "delivery-date")?,
    };

    let candidate = DocumentRecord {
        file_name: fields.file_name.unwrap_or_default(),
        doc_ref: fields.doc_ref.unwrap_or_default(),
        title: fields.title.unwrap_or_default(),
        status: parse_status_flag(fields.status.as_deref().unwrap_or(""))?,
        discipline: parse_discipline_flag(fields.discipline.as_deref().unwrap_or(""))?,
        file_type: fields.file_type.unwrap_or_default(),
        rev_date: parse_date_flag(fields.rev_date.as_deref().unwrap_or(""), "rev-date")?,
        delivery_date,
        project: fields.project.unwrap_or_default(),
        originator: fields.originator.unwrap_or_default(),
        stage: fields.stage.unwrap_or_default(),
    };

    let id = register.add(candidate)?;
    println!("Added record {}", id);
    Ok(())
}

fn cmd_list(config_path: &Path, json: bool) -> CliResult<()> {
    let register = open_register(config_path)?;
    let entries: Vec<_> = register.table().entries().iter().collect();
    if json {
        output::print_entries_json(&entries)?;
    } else {
        output::print_entries(&entries);
    }
    Ok(())
}

fn cmd_search(config_path: &Path, keyword: &str) -> CliResult<()> {
    let register = open_register(config_path)?;
    let hits = search(register.table(), keyword);
    output::print_entries(&hits);
    Ok(())
}

fn cmd_filter(
    config_path: &Path,
    status: Option<String>,
    discipline: Option<String>,
    originator: Option<String>,
    doc_ref: Option<String>,
) -> CliResult<()> {
    let register = open_register(config_path)?;

    let criteria = FilterCriteria {
        status: match pass_through(status) {
            None => None,
            Some(input) => parse_status_flag(&input)?,
        },
        discipline: match pass_through(discipline) {
            None => None,
            Some(input) => parse_discipline_flag(&input)?,
        },
        originator: pass_through(originator),
        doc_ref: pass_through(doc_ref),
    };

    let matches = filter(register.table(), &criteria);
    output::print_entries(&matches);
    Ok(())
}

fn cmd_edit(config_path: &Path, id: RecordId, fields: FieldArgs) -> CliResult<()> {
    let mut register = open_register(config_path)?;

    let mut session = EditSession::default();
    session.begin(id);

    let current = register
        .table()
        .get(id)
        .cloned()
        .ok_or(RegisterError::UnknownRecord(id))?;

    // Omitted flag keeps the stored value; an empty string clears it. The
    // merged record replaces the stored one verbatim, without re-validation.
    let merged = DocumentRecord {
        file_name: fields.file_name.unwrap_or(current.file_name),
        doc_ref: fields.doc_ref.unwrap_or(current.doc_ref),
        title: fields.title.unwrap_or(current.title),
        status: match fields.status.as_deref() {
            None => current.status,
            Some(input) => parse_status_flag(input)?,
        },
        discipline: match fields.discipline.as_deref() {
            None => current.discipline,
            Some(input) => parse_discipline_flag(input)?,
        },
        file_type: fields.file_type.unwrap_or(current.file_type),
        rev_date: match fields.rev_date.as_deref() {
            None => current.rev_date,
            Some(input) => parse_date_flag(input, "rev-date")?,
        },
        delivery_date: match fields.delivery_date.as_deref() {
            None => current.delivery_date,
            Some(input) => parse_date_flag(input, "delivery-date")?,
        },
        project: fields.project.unwrap_or(current.project),
        originator: fields.originator.unwrap_or(current.originator),
        stage: fields.stage.unwrap_or(current.stage),
    };

    register.update(id, merged)?;
    session.finish();
    println!("Updated record {}", id);
    Ok(())
}

fn cmd_delete(config_path: &Path, id: RecordId) -> CliResult<()> {
    let mut register = open_register(config_path)?;
    let removed = register.delete(id)?;
    println!("Deleted record {} ({})", id, removed.doc_ref);
    Ok(())
}

fn cmd_export_csv(config_path: &Path, output_path: &Path) -> CliResult<()> {
    let register = open_register(config_path)?;
    let bytes = export::to_csv(register.table());
    fs::write(output_path, &bytes)?;
    Logger::info(
        "EXPORT_WRITTEN",
        &[
            ("format", "csv"),
            ("path", &output_path.display().to_string()),
            ("records", &register.table().len().to_string()),
        ],
    );
    println!("Wrote {} ({} records)", output_path.display(), register.table().len());
    Ok(())
}

fn cmd_export_report(config_path: &Path, output_path: &Path) -> CliResult<()> {
    let register = open_register(config_path)?;
    let bytes = export::to_report(register.table())?;
    fs::write(output_path, &bytes)?;
    Logger::info(
        "EXPORT_WRITTEN",
        &[
            ("format", "pdf"),
            ("path", &output_path.display().to_string()),
            ("records", &register.table().len().to_string()),
        ],
    );
    println!("Wrote {} ({} records)", output_path.display(), register.table().len());
    Ok(())
}

/// "All" (any case) and absent both mean no criterion.
fn pass_through(input: Option<String>) -> Option<String> {
    input.filter(|s| !s.trim().is_empty() && !s.trim().eq_ignore_ascii_case("all"))
}

fn parse_status_flag(input: &str) -> CliResult<Option<Status>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    Status::parse(input)
        .map(Some)
        .ok_or_else(|| CliError::invalid_value("status", input))
}

fn parse_discipline_flag(input: &str) -> CliResult<Option<Discipline>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    Discipline::parse(input)
        .map(Some)
        .ok_or_else(|| CliError::invalid_value("discipline", input))
}

fn parse_date_flag(input: &str, flag: &'static str) -> CliResult<Option<NaiveDate>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map(Some)
        .map_err(|_| CliError::invalid_value(flag, input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_fields() -> FieldArgs {
        FieldArgs {
            file_name: None,
            doc_ref: None,
            title: None,
            status: None,
            discipline: None,
            file_type: None,
            rev_date: None,
            delivery_date: None,
            project: None,
            originator: None,
            stage: None,
        }
    }

    fn complete_fields(doc_ref: &str) -> FieldArgs {
        FieldArgs {
            file_name: Some(format!("{}.pdf", doc_ref)),
            doc_ref: Some(doc_ref.into()),
            title: Some("Setting Out Plan".into()),
            status: None,
            discipline: Some("Surveying".into()),
            file_type: Some("Drawing".into()),
            rev_date: None,
            delivery_date: Some("2024-11-05".into()),
            project: Some("Harbour Gate".into()),
            originator: Some("North Surveys".into()),
            stage: Some("Stage 2".into()),
        }
    }

    /// Init in a temp dir with the backing file kept inside it.
    fn init_register(dir: &Path) -> std::path::PathBuf {
        let config_path = dir.join("docreg.json");
        let config = Config {
            data_file: dir.join("documents.csv").display().to_string(),
        };
        fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        config_path
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.data_file, "documents.csv");
    }

    #[test]
    fn test_config_rejects_empty_data_file() {
        let config = Config {
            data_file: "  ".into(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_is_not_initialized() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("docreg.json")).unwrap_err();
        assert!(matches!(err, CliError::NotInitialized(_)));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = init_register(dir.path());
        let err = cmd_init(&config_path).unwrap_err();
        assert!(matches!(err, CliError::AlreadyInitialized(_)));
    }

    #[test]
    fn test_add_defaults_delivery_date_to_today() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = init_register(dir.path());

        let mut fields = complete_fields("R-1");
        fields.delivery_date = None;
        cmd_add(&config_path, fields).unwrap();

        let register = open_register(&config_path).unwrap();
        let record = &register.table().entries()[0].record;
        assert_eq!(record.delivery_date, Some(Local::now().date_naive()));
    }

    #[test]
    fn test_add_aggregates_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = init_register(dir.path());

        let err = cmd_add(&config_path, empty_fields()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("File Name"));
        assert!(message.contains("Project Stage"));
        // Delivery Date defaulted to today, so it is not missing.
        assert!(!message.contains("Delivery Date"));
    }

    #[test]
    fn test_edit_merges_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = init_register(dir.path());
        cmd_add(&config_path, complete_fields("R-1")).unwrap();

        let mut edit = empty_fields();
        edit.status = Some("c".into());
        edit.title = Some(String::new());
        cmd_edit(&config_path, RecordId(1), edit).unwrap();

        let register = open_register(&config_path).unwrap();
        let record = &register.table().entries()[0].record;
        assert_eq!(record.status, Some(Status::ReviseAndResubmit));
        assert_eq!(record.title, "");
        // Untouched fields kept.
        assert_eq!(record.doc_ref, "R-1");
    }

    #[test]
    fn test_delete_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = init_register(dir.path());
        cmd_add(&config_path, complete_fields("R-1")).unwrap();
        cmd_add(&config_path, complete_fields("R-2")).unwrap();

        cmd_delete(&config_path, RecordId(1)).unwrap();

        let register = open_register(&config_path).unwrap();
        assert_eq!(register.table().len(), 1);
        assert_eq!(register.table().entries()[0].record.doc_ref, "R-2");
    }

    #[test]
    fn test_export_csv_artifact_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = init_register(dir.path());
        cmd_add(&config_path, complete_fields("R-1")).unwrap();

        let artifact = dir.path().join("export.csv");
        cmd_export_csv(&config_path, &artifact).unwrap();

        let loaded = RegisterStore::new(&artifact).load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].doc_ref, "R-1");
    }

    #[test]
    fn test_pass_through_all() {
        assert_eq!(pass_through(Some("All".into())), None);
        assert_eq!(pass_through(Some("all".into())), None);
        assert_eq!(pass_through(None), None);
        assert_eq!(pass_through(Some("ACME".into())), Some("ACME".into()));
    }

    #[test]
    fn test_flag_parsers() {
        assert_eq!(parse_status_flag("d").unwrap(), Some(Status::Rejected));
        assert!(parse_status_flag("E - Withdrawn").is_err());
        assert_eq!(
            parse_discipline_flag("civil").unwrap(),
            Some(Discipline::Civil)
        );
        assert!(parse_discipline_flag("Select...").is_err());
        assert_eq!(
            parse_date_flag("2024-11-05", "rev-date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 5)
        );
        assert!(parse_date_flag("05/11/2024", "rev-date").is_err());
        assert_eq!(parse_date_flag("", "rev-date").unwrap(), None);
    }
}
