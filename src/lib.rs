/*!
Simple, but efficient duty cycle calculator

States are kept as bits in a circular array of machine words and the
fraction of "on" states is counted with a SWAR popcount, 4 words at a time.
See [`RingBitCounter`].
*/

pub mod duty_cycle;
pub mod error;
pub mod helpers;
pub mod macros;
pub mod popcount;

pub use self::{duty_cycle::RingBitCounter, error::Error};
