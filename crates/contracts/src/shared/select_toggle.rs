/// Open/closed state of a single-choice dropdown.
///
/// Toggling flips the state. Picking an option always closes the list and
/// hands the option back so the caller can store it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent<T> {
    Toggle,
    Select(T),
}

impl SelectState {
    pub fn is_open(self) -> bool {
        self == SelectState::Open
    }

    /// Next state plus the option picked by this event, if any
    pub fn next<T>(self, event: SelectEvent<T>) -> (SelectState, Option<T>) {
        match event {
            SelectEvent::Toggle => match self {
                SelectState::Closed => (SelectState::Open, None),
                SelectState::Open => (SelectState::Closed, None),
            },
            SelectEvent::Select(option) => (SelectState::Closed, Some(option)),
        }
    }
}
