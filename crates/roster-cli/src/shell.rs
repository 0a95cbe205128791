//! Line-oriented stand-in for the roster form.
//!
//! A plain line replaces the name input. Lines starting with `:` trigger the
//! form's buttons. The user list is re-rendered whenever the store publishes
//! a new snapshot.

use crate::error::Result as CliResult;
use crate::render;

use roster_core::User;
use roster_store::UserStore;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;

const COMMAND_PREFIX: char = ':';

const HELP: &str =
    "Type a name, then :add to create it. :load reloads, :drop deletes everyone, :quit exits.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    /// New contents of the name input
    Name(String),
    Add,
    Load,
    Drop,
    Help,
    Quit,
    Unknown(String),
}

impl ShellInput {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(COMMAND_PREFIX) else {
            return ShellInput::Name(line.to_string());
        };

        match command.trim().to_lowercase().as_str() {
            "add" | "a" => ShellInput::Add,
            "load" | "l" => ShellInput::Load,
            "drop" | "d" => ShellInput::Drop,
            "help" | "h" | "?" => ShellInput::Help,
            "quit" | "q" | "exit" => ShellInput::Quit,
            other => ShellInput::Unknown(other.to_string()),
        }
    }
}

/// Read lines from `input` until EOF or `:quit`.
pub async fn run<R, W>(store: &UserStore, input: R, out: &mut W) -> CliResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut users_rx = store.subscribe_users();
    let mut lines = input.lines();

    writeln!(out, "{HELP}")?;

    while let Some(line) = lines.next_line().await? {
        match ShellInput::parse(&line) {
            ShellInput::Name(name) => store.set_user_name(name),
            ShellInput::Add => match store.create_new_user() {
                Some(intent) => intent.settled().await,
                None => writeln!(out, "Enter a name before :add")?,
            },
            ShellInput::Load => store.load_users().settled().await,
            ShellInput::Drop => store.drop_all().settled().await,
            ShellInput::Help => writeln!(out, "{HELP}")?,
            ShellInput::Quit => break,
            ShellInput::Unknown(command) => writeln!(out, "Unknown command :{command}")?,
        }

        render_if_changed(&mut users_rx, out)?;
    }

    out.flush()?;
    Ok(())
}

fn render_if_changed<W: Write>(
    users_rx: &mut watch::Receiver<Vec<User>>,
    out: &mut W,
) -> CliResult<()> {
    if users_rx.has_changed().unwrap_or(false) {
        let users = users_rx.borrow_and_update().clone();
        write!(out, "{}", render::users_list(&users))?;
    }
    Ok(())
}
