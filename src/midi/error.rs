#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("MIDI CC controller number {} out of range (0..=127)", .0)]
    ControllerNumberOutOfRange(i64),

    #[error("Couldn't parse MIDI CC controller number {:?}", .0)]
    Parse(String),
}

impl Error {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::ControllerNumberOutOfRange(_))
    }
}
