use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::UserStore;

pub fn run<S: UserStore>(store: &S) -> Result<CmdResult> {
    let users = store.list()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Users data"));
    if users.is_empty() {
        result.add_message(CmdMessage::plain("No data..."));
    }
    Ok(result.with_listed_users(users))
}
