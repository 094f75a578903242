use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserCandidate;
use crate::store::UserStore;

pub fn run<S: UserStore>(store: &mut S, candidate: &UserCandidate) -> Result<CmdResult> {
    let user = candidate.validate()?;
    store.insert(user.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("User has been successfully added!"));
    Ok(result.with_affected_users(vec![user]))
}
