//! Ordering and matching for list, find and remove.

use crate::core::domain::Record;

/// Sort records ascending by id. The sort is stable.
pub fn sort_by_id(records: &mut [&Record]) {
    records.sort_by(|a, b| a.id().cmp(b.id()));
}

/// Whether `record` matches a search word.
///
/// Case-insensitive substring match against the category and the plaintext
/// account. An empty word matches everything.
pub fn matches(record: &Record, word: &str) -> bool {
    if word.is_empty() {
        return true;
    }
    let word = word.to_lowercase();
    record.category().to_lowercase().contains(&word)
        || record.account().to_lowercase().contains(&word)
}

/// Whether `record` belongs to exactly this category and plaintext account.
pub fn is_account(record: &Record, category: &str, account: &str) -> bool {
    record.category() == category && record.account_bytes() == account.as_bytes()
}

/// Ids starting with `prefix`, ascending.
pub fn ids_with_prefix<'a, I>(ids: I, prefix: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut found: Vec<String> = ids
        .into_iter()
        .filter(|id| id.starts_with(prefix))
        .cloned()
        .collect();
    found.sort();
    found
}
