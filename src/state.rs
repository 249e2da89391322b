//! Save state support shared by every emulated component.
//!
//! Each hardware component (CPU, PPU, APU, timer, cartridge, ...) implements
//! [`StateComponent`] so that a full machine snapshot can be built by
//! concatenating the serialized state of its parts, and restored the same way.

use gbcore_common::error::Error;

/// Selects the on-disk layout used by [`StateComponent::state`] and
/// [`StateComponent::set_state`].
///
/// Only [`StateFormat::Bos`] (this crate's own flat format) is implemented,
/// the enum exists so callers don't have to change signatures the day a
/// second format shows up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StateFormat {
    #[default]
    Bos,
}

/// A piece of emulator state that can be serialized into a flat byte
/// buffer and restored from one.
///
/// Implementations should be symmetric: `c.set_state(&c.state(f)?, f)`
/// must leave `c` observationally identical to its state before the call.
pub trait StateComponent {
    fn state(&self, format: Option<StateFormat>) -> Result<Vec<u8>, Error>;

    fn set_state(&mut self, data: &[u8], format: Option<StateFormat>) -> Result<(), Error>;
}
