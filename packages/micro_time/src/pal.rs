mod abstractions;
mod facade;

pub(crate) use abstractions::*;
pub(crate) use facade::*;

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::*;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::*;

#[cfg(not(any(unix, windows)))]
mod rust;
#[cfg(not(any(unix, windows)))]
pub(crate) use rust::*;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub(crate) use mock::*;
