use crate::input::{Key, KeyInput};

/// Render loop phase.
///
/// The only transition is `Running` → `Closing`; there is no way back.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Phase {
    #[default]
    Running,
    Closing,
}

/// Close flag of one window, checked once per frame.
#[derive(Debug, Default)]
pub struct LoopState {
    phase: Phase,
}

impl LoopState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn should_close(&self) -> bool {
        self.phase == Phase::Closing
    }

    /// Marks the window for close. Idempotent.
    pub fn request_close(&mut self) {
        if self.phase == Phase::Running {
            log::info!("window close requested");
        }
        self.phase = Phase::Closing;
    }

    /// Applies a key transition. Returns `true` if it requested close.
    ///
    /// Escape is the only key the loop reacts to.
    pub fn handle_key(&mut self, input: &KeyInput) -> bool {
        if input.is_press_of(Key::Escape) {
            self.request_close();
            return true;
        }
        false
    }

    /// Gate at the top of an iteration: `false` once closing, so no further
    /// frame is started after a close request.
    pub fn begin_frame(&self) -> bool {
        self.phase == Phase::Running
    }
}
