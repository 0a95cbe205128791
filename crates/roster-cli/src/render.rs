use crate::error::Result as CliResult;

use roster_core::User;

const EMPTY_LIST: &str = "(no users)";

/// Snapshot as JSON, one object per user.
pub fn users_json(users: &[User], pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(users)?
    } else {
        serde_json::to_string(users)?
    };
    Ok(json)
}

/// Snapshot as the numbered list the shell shows.
pub fn users_list(users: &[User]) -> String {
    if users.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }

    users
        .iter()
        .enumerate()
        .map(|(index, user)| format!("{:>3}. {}\n", index + 1, user.display_name()))
        .collect()
}
