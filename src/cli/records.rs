//! Record commands.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::{Confirm, Password};
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, session, table};
use crate::core::domain::Draft;
use crate::error::Result;

/// Add a new record.
///
/// Without `--password` the password is read from piped stdin, or prompted
/// for with hidden input.
pub fn add(store: Option<&Path>, category: &str, account: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => Zeroizing::new(p),
        None => read_password()?,
    };

    let vault = session::open(store)?;
    let (id, _) = vault.add(Draft::new(category, account, &password))?;
    output::success(&format!("added {}", output::id(&id)));
    println!("{}", id);
    Ok(())
}

/// Update fields of an existing record.
pub fn update(
    store: Option<&Path>,
    id: &str,
    category: Option<String>,
    account: Option<String>,
    password: Option<String>,
) -> Result<()> {
    if category.is_none() && account.is_none() && password.is_none() {
        output::warn("nothing to update");
        output::hint("pass --category, --account or --password");
        return Ok(());
    }

    let mut draft = Draft::update(id);
    if let Some(category) = category {
        draft = draft.with_category(&category);
    }
    if let Some(account) = account {
        draft = draft.with_account(&account);
    }
    if let Some(password) = password {
        draft = draft.with_password(&Zeroizing::new(password));
    }

    let vault = session::open(store)?;
    let (id, _) = vault.add(draft)?;
    output::success(&format!("updated {}", output::id(&id)));
    Ok(())
}

/// Remove records by id prefix, or by category and account.
pub fn rm(
    store: Option<&Path>,
    ids: &[String],
    category: Option<String>,
    account: Option<String>,
    all: bool,
) -> Result<()> {
    let vault = session::open(store)?;
    let deleted = match (category, account) {
        (Some(category), Some(account)) => vault.remove_by_account(&category, &account, all)?,
        _ => vault.remove(ids, all)?,
    };

    info!(count = deleted.len(), "removed");
    output::success(&format!("removed {} password(s)", deleted.len()));
    for id in &deleted {
        println!("{}", id);
    }
    Ok(())
}

/// List every record.
pub fn list(store: Option<&Path>, no_header: bool, show: bool, json: bool) -> Result<()> {
    let vault = session::open(store)?;
    let table = vault.list()?;

    if json {
        println!("{}", table::render_json(&table, show)?);
    } else if table.is_empty() {
        output::dimmed("no passwords stored");
        output::hint("run: pwbox add --category <CATEGORY> --account <ACCOUNT>");
    } else {
        print!("{}", table::render(&table, show, !no_header));
    }
    Ok(())
}

/// Find records by category or account.
pub fn find(store: Option<&Path>, word: &str, show: bool, json: bool) -> Result<()> {
    let vault = session::open(store)?;
    let table = vault.find(word)?;

    if json {
        println!("{}", table::render_json(&table, show)?);
    } else if table.is_empty() {
        output::dimmed(&format!("nothing matches '{}'", word));
    } else {
        print!("{}", table::render(&table, show, true));
    }
    Ok(())
}

/// Remove every record, after confirmation unless `yes`.
pub fn clear(store: Option<&Path>, yes: bool) -> Result<()> {
    let vault = session::open(store)?;

    if !yes {
        let count = vault.len()?;
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} passwords?", count))
            .default(false)
            .interact()?;
        if !confirmed {
            output::dimmed("cancelled");
            return Ok(());
        }
    }

    let deleted = vault.clear()?;
    output::success(&format!("removed {} password(s)", deleted.len()));
    Ok(())
}

/// Read a new record password from piped stdin or a hidden prompt.
fn read_password() -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut input = Zeroizing::new(String::new());
        io::stdin().read_line(&mut input)?;
        return Ok(Zeroizing::new(input.trim_end_matches(['\r', '\n']).to_string()));
    }

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "passwords do not match")
        .interact()?;
    Ok(Zeroizing::new(password))
}
