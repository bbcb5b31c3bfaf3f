/// Whether the snake is moving and, if not, why not
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum RunStatus {
    /// A fresh round that has not started moving yet
    #[default]
    Idle,
    Running,
    Paused(PauseReason),
    /// The round is over.  Only a restart leaves this state.
    Locked(LockCause),
}

impl RunStatus {
    pub(crate) fn is_running(self) -> bool {
        self == RunStatus::Running
    }

    pub(crate) fn is_locked(self) -> bool {
        matches!(self, RunStatus::Locked(_))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PauseReason {
    /// The player paused the game
    Manual,

    /// The terminal lost focus.  Only pauses for this reason are resumed
    /// automatically when focus returns.
    FocusLost,

    /// The player reset the board with the "r" key
    ManualReset,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LockCause {
    /// The snake's head ran into its own body
    SelfCollision,

    /// The snake fills the board and there is nowhere left to put an apple
    BoardFilled,
}
