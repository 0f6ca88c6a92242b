//! CLI argument definitions using clap.
//!
//! Field flags on `add` and `edit` are all optional at the clap layer:
//! required-field enforcement belongs to the validator, which reports every
//! missing field in one aggregate warning instead of clap rejecting them
//! one at a time.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::export::{CSV_FILENAME, REPORT_FILENAME};

/// docreg - a write-through register for controlled project documents
#[derive(Parser, Debug)]
#[command(name = "docreg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Record field flags shared by `add` and `edit`.
///
/// On `edit`, an omitted flag keeps the stored value and an empty string
/// clears it (edits are applied verbatim, without re-validation).
#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    /// File name of the document
    #[arg(long)]
    pub file_name: Option<String>,

    /// Document reference
    #[arg(long)]
    pub doc_ref: Option<String>,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Approval status (label or review code letter A-D)
    #[arg(long)]
    pub status: Option<String>,

    /// Discipline (Architecture, Civil, Electrical, Mechanical, Surveying)
    #[arg(long)]
    pub discipline: Option<String>,

    /// File type
    #[arg(long)]
    pub file_type: Option<String>,

    /// Revision date (YYYY-MM-DD)
    #[arg(long)]
    pub rev_date: Option<String>,

    /// Delivery date (YYYY-MM-DD; defaults to today on add)
    #[arg(long)]
    pub delivery_date: Option<String>,

    /// Project name
    #[arg(long)]
    pub project: Option<String>,

    /// Originating organisation
    #[arg(long)]
    pub originator: Option<String>,

    /// Project stage
    #[arg(long)]
    pub stage: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a register: write the config file and an empty backing file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./docreg.json")]
        config: PathBuf,
    },

    /// Add a new document record
    Add {
        /// Path to configuration file
        #[arg(long, default_value = "./docreg.json")]
        config: PathBuf,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Print the full register
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./docreg.json")]
        config: PathBuf,

        /// Emit records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Keyword search across every field
    Search {
        /// Path to configuration file
        #[arg(long, default_value = "./docreg.json")]
        config: PathBuf,

        /// Keyword (empty matches everything)
        keyword: String,
    },

    /// Filter by status, discipline, originator and/or document reference
    Filter {
        /// Path to configuration file
        #[arg(long, default_value = "./docreg.json")]
        config: PathBuf,

        /// Status to match exactly ("All" passes everything)
        #[arg(long)]
        status: Option<String>,

        /// Discipline to match exactly ("All" passes everything)
        #[arg(long)]
        discipline: Option<String>,

        /// Originator to match exactly ("All" passes everything)
        #[arg(long)]
        originator: Option<String>,

        /// Document reference to match exactly ("All" passes everything)
        #[arg(long)]
        doc_ref: Option<String>,
    },

    /// Replace a record's fields
    Edit {
        /// Path to configuration file
        #[arg(long, default_value = "./docreg.json")]
        config: PathBuf,

        /// Record id (shown by 'list')
        id: u64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a record
    Delete {
        /// Path to configuration file
        #[arg(long, default_value = "./docreg.json")]
        config: PathBuf,

        /// Record id (shown by 'list')
        id: u64,
    },

    /// Export the register as CSV
    ExportCsv {
        /// Path to configuration file
        #[arg(long, default_value = "./docreg.json")]
        config: PathBuf,

        /// Output path
        #[arg(long, short, default_value = CSV_FILENAME)]
        output: PathBuf,
    },

    /// Export the register as a PDF report
    ExportReport {
        /// Path to configuration file
        #[arg(long, default_value = "./docreg.json")]
        config: PathBuf,

        /// Output path
        #[arg(long, short, default_value = REPORT_FILENAME)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
