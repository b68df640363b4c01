/*!
    host side of the protocol, in `std` environment

    two operations are exposed:

    - [send] builds one command frame from typed inputs and flushes it to the addressed peer, fire and forget
    - [query] sends a command then polls the peer for its reply, with bounded retries when the caller waits for a specific answer

    both borrow the [Transport](crate::transport::Transport) handle mutably for the whole call, so one command at a time owns the bus buffer and address register
*/

/// frame building and transmission
mod sending;
/// the send/capture/evaluate retry loop
mod polling;

pub use sending::*;
pub use polling::*;

use thiserror::Error;


/// error ending a plain send
#[derive(Error, Debug)]
pub enum SendError<E> {
    /// required address or opcode absent, nothing was transmitted
    #[error("Bad i2c request")]
    MissingField,
    /// the bus driver could not transmit the buffered frame
    #[error("problem with i2c bus")]
    Bus(E),
}

/// error ending a query
#[derive(Error, Debug)]
pub enum QueryError<E> {
    /// capture attempted without a destination address ever set
    #[error("Bad i2c request")]
    NoAddress,
    /// the request frame could not be transmitted
    #[error("failed to transmit request frame")]
    SendFailed(SendError<E>),
    /// the bus driver could not complete a capture
    #[error("problem with i2c bus")]
    Bus(E),
    /// fewer bytes captured than a frame header, the reply is unusable
    #[error("Bad i2c response")]
    Malformed,
    /// the expected answer never arrived inside the query window
    #[error("I2C wait response Timeout")]
    Timeout,
}
