/*!
    abstraction over the addressed byte bus the protocol runs on

    the concrete driver belongs to the surrounding firmware, the protocol core only needs the handful of primitives in [Transport]
*/


/**
    addressed, byte oriented bus primitives

    an implementation owns an outgoing buffer and a destination address register. the protocol assumes exclusive ownership of both for the duration of one send or query call, which the `&mut` receivers make a compile time property. an application sharing one transport between several callers must serialize whole calls around it, never interleave primitives
*/
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// error raised by the bus driver
    type Error;

    /// discard any pending outgoing bytes and forget the destination address. idempotent
    fn reset(&mut self);
    /// record the destination peer for the next flush
    fn set_address(&mut self, address: u8);
    /// whether a destination was set since the last reset
    fn has_address(&self) -> bool;
    /// append raw bytes to the outgoing buffer, no protocol awareness
    fn append(&mut self, bytes: &[u8]);
    /// physically transmit the buffered bytes to the addressed peer
    async fn flush(&mut self) -> Result<(), Self::Error>;
    /**
        read up to `buffer.len()` bytes from the addressed peer, returning the number actually received

        may deliver fewer bytes than requested, or zero from a peer staying silent past the driver's own short timeout. this is the designed suspension point of the protocol
    */
    async fn capture(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}
