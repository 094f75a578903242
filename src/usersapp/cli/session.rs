//! The prompt loop.
//!
//! One command is read, dispatched and rendered before the next prompt is shown. The
//! loop ends on `quit` or when input runs out; recoverable errors are rendered as error
//! messages and never end it.

use super::prompt::Prompter;
use super::render::Renderer;
use std::io::Write;
use usersapp::action::{Action, UnknownAction};
use usersapp::api::{CmdMessage, CmdResult, UsersApi};
use usersapp::config::AppConfig;
use usersapp::error::Result;
use usersapp::model::UserCandidate;
use usersapp::store::UserStore;

const FAREWELL: &str = "Bye bye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<S: UserStore, P: Prompter, W: Write> {
    api: UsersApi<S>,
    prompter: P,
    renderer: Renderer<W>,
    config: AppConfig,
}

impl<S: UserStore, P: Prompter, W: Write> Session<S, P, W> {
    pub fn new(api: UsersApi<S>, prompter: P, renderer: Renderer<W>, config: AppConfig) -> Self {
        Self {
            api,
            prompter,
            renderer,
            config,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.renderer.banner()?;
        }

        loop {
            let Some(input) = self.prompter.ask(&self.config.prompt)? else {
                log::debug!("input closed, ending session");
                self.farewell()?;
                return Ok(());
            };

            if input.trim().is_empty() {
                continue;
            }

            match input.parse::<Action>() {
                Ok(action) => {
                    log::debug!("dispatching {}", action);
                    if self.dispatch(action)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(unknown) => self.unknown(unknown)?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (UsersApi<S>, W) {
        (self.api, self.renderer.into_inner())
    }

    fn dispatch(&mut self, action: Action) -> Result<Flow> {
        match action {
            Action::List => {
                let result = self.api.list_users();
                self.report(result)?;
            }
            Action::Add => {
                let Some(name) = self.prompter.ask("Enter name")? else {
                    return self.quit();
                };
                let Some(age) = self.prompter.ask("Enter age")? else {
                    return self.quit();
                };
                let candidate = UserCandidate::from_input(&name, &age);
                let result = self.api.add_user(&candidate);
                self.report(result)?;
            }
            Action::Remove => {
                let Some(name) = self.prompter.ask("Enter name")? else {
                    return self.quit();
                };
                let result = self.api.remove_user(&name);
                self.report(result)?;
            }
            Action::Help => self.renderer.actions()?,
            Action::Quit => return self.quit(),
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, result: Result<CmdResult>) -> Result<()> {
        match result {
            Ok(result) => {
                for user in &result.affected_users {
                    log::debug!(
                        "affected {:?}, {} users in store",
                        user,
                        self.api.user_count()
                    );
                }
                self.renderer.messages(&result.messages)?;
                if !result.listed_users.is_empty() {
                    self.renderer.users(&result.listed_users)?;
                }
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                log::debug!("recovered from {:?}", e);
                self.renderer.message(&CmdMessage::error(e.to_string()))?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn unknown(&mut self, unknown: UnknownAction) -> Result<()> {
        if !self.config.report_unknown_commands {
            log::debug!("ignoring {}", unknown);
            return Ok(());
        }
        self.renderer.message(&CmdMessage::error(format!(
            "{} (type \"help\" to see available actions)",
            unknown
        )))?;
        Ok(())
    }

    fn quit(&mut self) -> Result<Flow> {
        self.farewell()?;
        Ok(Flow::Quit)
    }

    fn farewell(&mut self) -> Result<()> {
        self.renderer.message(&CmdMessage::info(FAREWELL))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::prompt::LinePrompter;
    use super::*;
    use std::io::{self, Cursor};
    use usersapp::store::memory::InMemoryStore;

    type TestSession = Session<InMemoryStore, LinePrompter<Cursor<String>, io::Sink>, Vec<u8>>;

    fn session(script: &str, config: AppConfig) -> TestSession {
        Session::new(
            UsersApi::new(InMemoryStore::new()),
            LinePrompter::new(Cursor::new(script.to_string()), io::sink()),
            Renderer::new(Vec::new(), false),
            config,
        )
    }

    fn quiet() -> AppConfig {
        AppConfig {
            show_banner: false,
            ..AppConfig::default()
        }
    }

    /// Runs `script` to completion, returning the final user count and the output.
    fn run_script(script: &str) -> (usize, String) {
        run_script_with(script, quiet())
    }

    fn run_script_with(script: &str, config: AppConfig) -> (usize, String) {
        let mut session = session(script, config);
        session.run().unwrap();
        let (api, out) = session.into_parts();
        (api.user_count(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn list_on_empty_store_reports_no_data() {
        let (count, out) = run_script("list\nquit\n");
        assert_eq!(count, 0);
        assert_eq!(out, "ℹ Users data\nNo data...\nℹ Bye bye!\n");
    }

    #[test]
    fn added_user_shows_up_in_table() {
        let (count, out) = run_script("add\nAnna\n30\nlist\nquit\n");
        assert_eq!(count, 1);
        assert!(out.contains("✔ User has been successfully added!"));
        assert!(out.contains("│ 0       │ Anna │ 30  │"));
        assert!(!out.contains("No data..."));
    }

    #[test]
    fn negative_age_is_rejected() {
        let (count, out) = run_script("add\nAnna\n-5\nlist\nquit\n");
        assert_eq!(count, 0);
        assert!(out.contains("✖ Wrong data! Age must be greater than zero, got -5"));
        assert!(out.contains("No data..."));
    }

    #[test]
    fn non_numeric_age_and_empty_name_are_rejected() {
        let (count, out) = run_script("add\nAnna\nabc\nadd\n\n30\nquit\n");
        assert_eq!(count, 0);
        assert!(out.contains("✖ Wrong data! Age must be a number"));
        assert!(out.contains("✖ Wrong data! Name must not be empty"));
    }

    #[test]
    fn fractional_age_is_accepted() {
        let (count, out) = run_script("add\nAnna\n30.5\nlist\nquit\n");
        assert_eq!(count, 1);
        assert!(out.contains("✔ User has been successfully added!"));
        assert!(out.contains("│ 0       │ Anna │ 30.5 │"));
    }

    #[test]
    fn name_typed_with_spaces_can_be_removed_the_same_way() {
        let (count, out) = run_script("add\nAnna \n30\nremove\nAnna \nquit\n");
        assert_eq!(count, 0);
        assert!(out.contains("✔ User has been successfully removed!"));
        assert!(!out.contains("User not found"));
    }

    #[test]
    fn remove_leaves_other_users() {
        let (count, out) =
            run_script("add\nAnna\n30\nadd\nBob\n25\nremove\nAnna\nlist\nquit\n");
        assert_eq!(count, 1);
        assert!(out.contains("✔ User has been successfully removed!"));
        assert!(out.contains("│ 0       │ Bob  │ 25  │"));
        assert!(!out.contains("│ Anna │"));
    }

    #[test]
    fn removing_missing_user_reports_not_found() {
        let (count, out) = run_script("add\nBob\n25\nrm\nAnna\nquit\n");
        assert_eq!(count, 1);
        assert!(out.contains("✖ User not found..."));
    }

    #[test]
    fn quit_stops_reading_input() {
        let (count, out) = run_script("add\nAnna\n30\nquit\nlist\n");
        assert_eq!(count, 1);
        assert!(out.ends_with("ℹ Bye bye!\n"));
        assert!(!out.contains("Users data"));
    }

    #[test]
    fn end_of_input_behaves_like_quit() {
        let (_, out) = run_script("list\n");
        assert!(out.ends_with("ℹ Bye bye!\n"));

        let (count, out) = run_script("add\nAnna\n");
        assert_eq!(count, 0);
        assert_eq!(out, "ℹ Bye bye!\n");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (_, out) = run_script("\n   \nquit\n");
        assert_eq!(out, "ℹ Bye bye!\n");
    }

    #[test]
    fn unknown_command_is_reported_by_default() {
        let (_, out) = run_script("dance\nquit\n");
        assert!(out.contains("✖ Unknown command: dance"));
    }

    #[test]
    fn unknown_command_can_be_silent() {
        let config = AppConfig {
            report_unknown_commands: false,
            ..quiet()
        };
        let (_, out) = run_script_with("dance\nquit\n", config);
        assert_eq!(out, "ℹ Bye bye!\n");
    }

    #[test]
    fn help_lists_actions() {
        let (_, out) = run_script("help\nquit\n");
        assert!(out.contains("add – add new user to the list"));
        assert!(out.contains("quit – quit the app"));
    }

    #[test]
    fn banner_is_printed_first() {
        let (_, out) = run_script_with("quit\n", AppConfig::default());
        assert!(out.starts_with("\nWelcome to the UsersApp!\n"));
        assert!(out.contains("remove – remove user from the list"));
    }

    #[test]
    fn quit_works_regardless_of_contents() {
        for script in ["quit\n", "add\nA\n1\nquit\n", "add\nA\n1\nadd\nB\n2\nexit\n"] {
            let mut session = session(script, quiet());
            assert!(session.run().is_ok());
        }
    }
}
