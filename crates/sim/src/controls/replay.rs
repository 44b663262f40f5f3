use combatants_shared::Command;

use crate::policy::{Control, ControlContext};

/// Plays back a recorded command log, then idles.
pub struct ReplayControl {
    commands: Vec<Command>,
    cursor: usize,
}

impl ReplayControl {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.commands.len() - self.cursor
    }
}

impl Control for ReplayControl {
    fn name(&self) -> &str {
        "replay"
    }

    fn poll(&mut self, _ctx: &ControlContext) -> Command {
        match self.commands.get(self.cursor) {
            Some(&command) => {
                self.cursor += 1;
                command
            }
            None => Command::none(),
        }
    }
}
