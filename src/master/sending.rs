use log::*;

use crate::{
    frame::Frame,
    transport::Transport,
    };
use super::SendError;


/// typed inputs of one command, as extracted by the surrounding command layer
#[derive(Copy, Clone, Debug, Default)]
pub struct Request<'a> {
    /// destination peer on the bus
    pub address: Option<u8>,
    /// application-defined command identifier
    pub opcode: Option<u8>,
    /// command payload, defaults to empty
    pub payload: Option<&'a [u8]>,
}

/**
    encode and transmit one command frame

    both address and opcode are required, a request missing either fails with [SendError::MissingField] before touching the bus. payload longer than [MAX_PAYLOAD](crate::frame::MAX_PAYLOAD) is truncated by the codec

    there is no retry, a flush failure propagates immediately
*/
pub async fn send<B: Transport>(bus: &mut B, request: &Request<'_>) -> Result<(), SendError<B::Error>> {
    let (Some(address), Some(opcode)) = (request.address, request.opcode)
        else {return Err(SendError::MissingField)};

    let frame = Frame::build(opcode, request.payload.unwrap_or(&[]));
    trace!("sending frame {:?} to {}", frame, address);

    bus.reset();
    bus.set_address(address);
    bus.append(&frame.to_wire());
    bus.flush().await.map_err(SendError::Bus)
}
