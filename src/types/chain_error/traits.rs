use super::{Cause, Error};
use core::fmt::{self, Display};

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.fmt().verbose(), f)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self.cause()? {
            Cause::Node(node) => Some(&**node),
            Cause::Foreign(foreign) => Some(&**foreign),
        }
    }
}
