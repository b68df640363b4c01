use heapless::Vec;
use packbytes::{FromBytes, ToBytes};


/// number of payload bytes a frame can carry
pub const MAX_PAYLOAD: usize = 28;
/// wire size of the frame header
pub const HEADER: usize = 2;
/// number of bytes to request from the bus for a reply, a full frame
pub const CAPTURE: usize = MAX_PAYLOAD + HEADER;


/// frame header as found on the wire
#[derive(Copy, Clone, FromBytes, ToBytes, Debug, Default)]
pub struct FrameHeader {
    /// application-defined command/response identifier
    pub opcode: u8,
    /// number of meaningful payload bytes following the header
    pub length: u8,
}

/**
    the unit exchanged with a bus peer, in both directions

    on the wire this is a [FrameHeader] followed by `length` payload bytes, the unused payload capacity never leaves the host. the layout is the same in both directions so decoding a captured reply is a plain reinterpretation of the bytes

    a frame is built fresh for each send or capture and does not outlive the call
*/
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub opcode: u8,
    pub payload: Vec<u8, MAX_PAYLOAD>,
}

impl Frame {
    /// build an outgoing frame, copying at most [MAX_PAYLOAD] payload bytes. longer input is silently truncated
    pub fn build(opcode: u8, payload: &[u8]) -> Self {
        let length = payload.len().min(MAX_PAYLOAD);
        let mut frame = Self {opcode, payload: Vec::new()};
        // bounded by the capacity just above, cannot fail
        let _ = frame.payload.extend_from_slice(&payload[.. length]);
        frame
    }
    /// exact number of bytes to transmit for this frame
    pub fn wire_size(&self) -> usize {
        HEADER + self.payload.len()
    }
    /// serialize to wire order, header first then the meaningful payload bytes
    pub fn to_wire(&self) -> Vec<u8, CAPTURE> {
        let header = FrameHeader {
            opcode: self.opcode,
            length: self.payload.len() as u8,
            };
        let mut wire = Vec::new();
        let _ = wire.extend_from_slice(&header.to_le_bytes());
        let _ = wire.extend_from_slice(&self.payload);
        wire
    }
    /**
        reinterpret captured bytes as a frame, `None` when too short to even hold a header

        the claimed payload length is clamped to what was actually captured and to [MAX_PAYLOAD], so a peer announcing more data than it delivered can never make the frame index out of its payload
    */
    pub fn from_wire(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER
            {return None}
        let header = FrameHeader::from_le_bytes(bytes[.. HEADER].try_into().unwrap());
        let length = usize::from(header.length)
            .min(bytes.len() - HEADER)
            .min(MAX_PAYLOAD);
        Some(Self::build(header.opcode, &bytes[HEADER .. HEADER + length]))
    }
    /// payload viewed as text, for peers answering with bounded ascii strings
    pub fn text(&self) -> Option<&str> {
        core::str::from_utf8(&self.payload).ok()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let payload = [0x61u8; MAX_PAYLOAD];
        for length in 0 ..= MAX_PAYLOAD {
            let frame = Frame::build(0x10, &payload[.. length]);
            assert_eq!(frame.wire_size(), HEADER + length);
            let wire = frame.to_wire();
            assert_eq!(wire.len(), frame.wire_size());
            assert_eq!(Frame::from_wire(&wire), Some(frame));
        }
    }

    #[test]
    fn truncation() {
        let long = [0x62u8; 40];
        let frame = Frame::build(3, &long);
        assert_eq!(frame.payload.len(), MAX_PAYLOAD);
        assert_eq!(&frame.payload[..], &long[.. MAX_PAYLOAD]);
        assert_eq!(frame.to_wire()[1], MAX_PAYLOAD as u8);
    }

    #[test]
    fn short_capture_rejected() {
        assert_eq!(Frame::from_wire(&[]), None);
        assert_eq!(Frame::from_wire(&[1]), None);
        assert_eq!(Frame::from_wire(&[1, 0]), Some(Frame::build(1, &[])));
    }

    #[test]
    fn claimed_length_clamped() {
        // length byte announcing more than was captured
        let frame = Frame::from_wire(&[1, 200, b'a', b'b']).unwrap();
        assert_eq!(&frame.payload[..], b"ab");
        // length byte announcing more than the payload capacity
        let mut wire = [b'x'; CAPTURE + 4];
        (wire[0], wire[1]) = (1, 255);
        let frame = Frame::from_wire(&wire).unwrap();
        assert_eq!(frame.payload.len(), MAX_PAYLOAD);
    }

    #[test]
    fn text_view() {
        assert_eq!(Frame::build(1, b"OK").text(), Some("OK"));
        assert_eq!(Frame::build(1, &[0xff, 0xfe]).text(), None);
    }
}
