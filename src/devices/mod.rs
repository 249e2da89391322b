//! Implementation of multiple devices using serial transfer (Link Cable).
//!
//! Some of the devices are purely virtual and are used for testing purposes
//! (eg: [`buffer`]) while [`stdout`] is a trivial real sink for bytes sent
//! over the link cable.

pub mod buffer;
pub mod stdout;
