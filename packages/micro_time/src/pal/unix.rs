mod bindings;
mod platform;
mod time_source;

use bindings::*;
pub(crate) use platform::*;
pub(crate) use time_source::*;
