//! Shareable navigation locations.
//!
//! A [`Location`] is the query-string encoding of the navigation state
//! (`view=details&id=27205`). The [`LocationCarrier`] is its URL-like
//! carrier: a session file read once at startup and rewritten on every
//! navigation transition, so a relaunch (or a `--location` deep link
//! pasted from someone else's session) reproduces the same view.

mod carrier;
mod descriptor;

pub use carrier::LocationCarrier;
pub use descriptor::Location;
