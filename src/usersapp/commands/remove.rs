use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::UserStore;

pub fn run<S: UserStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let removed = store.remove_first(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("User has been successfully removed!"));
    Ok(result.with_affected_users(vec![removed]))
}
