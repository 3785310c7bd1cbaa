mod names;
pub use names::{NAMES, UNDEFINED};

use std::fmt;

use crate::midi::Error;

/// Returns the conventional name of the MIDI CC controller `nb`.
///
/// Fails with [`Error::ControllerNumberOutOfRange`] if `nb` is not in `0..=127`.
pub fn name<N>(nb: N) -> Result<&'static str, Error>
where
    ControllerNumber: TryFrom<N, Error = Error>,
{
    ControllerNumber::try_from(nb)
        .map(ControllerNumber::name)
        .map_err(|err| {
            log::debug!("CC: {err}");

            err
        })
}

/// Iterates over all the controllers and their names, by ascending number.
pub fn names() -> impl Iterator<Item = (ControllerNumber, &'static str)> {
    ControllerNumber::all().map(|nb| (nb, nb.name()))
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ControllerNumber(u8);

impl ControllerNumber {
    pub const MIN: ControllerNumber = ControllerNumber(0);
    pub const MAX: ControllerNumber = ControllerNumber(0x7f);

    const CHANNEL_MODE_FIRST: u8 = 120;
    const LSB_OFFSET: u8 = 32;

    pub fn all() -> impl DoubleEndedIterator<Item = ControllerNumber> + ExactSizeIterator {
        (Self::MIN.0..=Self::MAX.0).map(ControllerNumber)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    pub fn is_undefined(self) -> bool {
        self.name() == UNDEFINED
    }

    /// Whether this number is a Channel Mode message rather than a controller.
    pub fn is_channel_mode(self) -> bool {
        self.0 >= Self::CHANNEL_MODE_FIRST
    }

    /// The LSB counterpart of a 14-bit MSB controller.
    pub fn lsb(self) -> Option<ControllerNumber> {
        (self.0 < Self::LSB_OFFSET).then(|| ControllerNumber(self.0 + Self::LSB_OFFSET))
    }
}

macro_rules! impl_try_from {
    ($($int:ty),+ $(,)?) => {
        $(
            impl TryFrom<$int> for ControllerNumber {
                type Error = Error;

                fn try_from(nb: $int) -> Result<Self, Error> {
                    match u8::try_from(nb) {
                        Ok(nb) if nb <= Self::MAX.0 => Ok(ControllerNumber(nb)),
                        _ => Err(Error::ControllerNumberOutOfRange(
                            i64::try_from(nb).unwrap_or(i64::MAX),
                        )),
                    }
                }
            }
        )+
    };
}

impl_try_from!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl From<ControllerNumber> for u8 {
    fn from(nb: ControllerNumber) -> Self {
        nb.0
    }
}

impl fmt::Display for ControllerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Displays a controller as `CC {nb}: {name}`, e.g. for log lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CCName(pub ControllerNumber);

impl fmt::Display for CCName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CC {}: {}", self.0, self.0.name())
    }
}
