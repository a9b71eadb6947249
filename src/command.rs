//! Commands encapsulate a single action behind a uniform `execute` operation,
//! so that whatever triggers the action (a button, a key press) never needs to
//! know what the action actually does.

use crate::error::CommandError;

pub trait Command: std::fmt::Debug {
    /// A short, stable identifier used in logs and status messages.
    fn name(&self) -> &'static str;

    /// Performs the command's effect.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the effect could not be completed.
    fn execute(&self) -> Result<(), CommandError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &'static str {
        "save"
    }

    fn execute(&self) -> Result<(), CommandError> {
        tracing::info!(command = self.name(), "Saving");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteCommand;

impl Command for DeleteCommand {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn execute(&self) -> Result<(), CommandError> {
        tracing::info!(command = self.name(), "Deleting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn save_and_delete_succeed() {
        assert_eq!(SaveCommand.execute(), Ok(()));
        assert_eq!(DeleteCommand.execute(), Ok(()));
    }

    #[test]
    fn commands_are_usable_as_trait_objects() {
        let commands: Vec<Rc<dyn Command>> =
            vec![Rc::new(SaveCommand) as Rc<dyn Command>, Rc::new(DeleteCommand)];
        let names: Vec<_> = commands.iter().map(|c| c.name()).collect();

        assert_eq!(names, vec!["save", "delete"]);
        assert!(commands.iter().all(|c| c.execute().is_ok()));
    }

    #[test]
    fn fresh_instances_behave_identically() {
        // stateless, so running a command repeatedly (or a new instance of it) changes nothing
        let first = SaveCommand;
        let second = SaveCommand;
        for _ in 0..3 {
            assert_eq!(first.execute(), second.execute());
        }
    }
}
