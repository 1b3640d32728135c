use super::sim::Simulation;

/// Keyboard commands understood by the front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    ReseatSwarm,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Spacebar" => Some(KeyAction::TogglePause),
        "r" | "R" => Some(KeyAction::ReseatSwarm),
        _ => None,
    }
}

impl Simulation {
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::TogglePause => {
                let paused = self.toggle_paused();
                log::info!("[keys] paused={}", paused);
            }
            KeyAction::ReseatSwarm => {
                self.reseat_swarm();
                log::info!("[keys] reseated swarm");
            }
        }
    }
}
