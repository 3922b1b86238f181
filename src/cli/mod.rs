//! Command-line interface.

pub mod output;
pub mod records;
pub mod session;
pub mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pwbox - a local password box sealed with one master password.
#[derive(Parser)]
#[command(
    name = "pwbox",
    about = "A local password box sealed with one master password",
    version,
    after_help = "The master password is read from PWBOX_MASTER_PASSWORD or prompted for."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Password box file (default: ~/.pwbox/passwords.json)
    #[arg(long, global = true, env = "PWBOX_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a new password
    Add {
        /// Grouping label (e.g. mail, bank)
        #[arg(short, long)]
        category: String,
        /// Account name
        #[arg(short, long)]
        account: String,
        /// Password (prompted for, or read from stdin, if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Change fields of an existing password
    Update {
        /// Full record id
        id: String,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        account: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Remove passwords by id (or unique id prefix), or by category and account
    Rm {
        /// Ids or id prefixes
        #[arg(required_unless_present = "category", conflicts_with = "category")]
        ids: Vec<String>,
        /// Category of the password to remove
        #[arg(short, long, requires = "account")]
        category: Option<String>,
        /// Account of the password to remove
        #[arg(short, long, requires = "category")]
        account: Option<String>,
        /// Remove every match instead of failing when several match
        #[arg(long)]
        all: bool,
    },

    /// List all passwords
    List {
        /// Omit the header line
        #[arg(long)]
        no_header: bool,
        /// Show passwords in clear text
        #[arg(short, long)]
        show: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find passwords whose category or account contains a word
    Find {
        /// Word to look for (case-insensitive)
        word: String,
        /// Show passwords in clear text
        #[arg(short, long)]
        show: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove every password
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute a command against the box at `store` (or the configured one).
pub fn execute(command: Command, store: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    let store = store.as_deref();
    match command {
        Add {
            category,
            account,
            password,
        } => records::add(store, &category, &account, password),
        Update {
            id,
            category,
            account,
            password,
        } => records::update(store, &id, category, account, password),
        Rm {
            ids,
            category,
            account,
            all,
        } => records::rm(store, &ids, category, account, all),
        List {
            no_header,
            show,
            json,
        } => records::list(store, no_header, show, json),
        Find { word, show, json } => records::find(store, &word, show, json),
        Clear { yes } => records::clear(store, yes),
    }
}
