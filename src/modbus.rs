use tokio_util::bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace};

/// Largest number of registers a single read request may ask for.
pub const MAX_READ_COUNT: u16 = 123;
/// Largest number of registers a single write request may carry.
pub const MAX_WRITE_COUNT: u16 = 123;

const HEADER_LENGTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub unit_id: u8,
    pub transaction_id: u16,
    pub operation: Operation,
}

/// Addresses are 1-based, as numbered in the vendor documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ReadHoldings { address: u16, count: u16 },
    ReadInputs { address: u16, count: u16 },
    WriteHolding { address: u16, value: u16 },
    WriteHoldings { address: u16, values: Vec<u16> },
}

impl Operation {
    pub fn function_code(&self) -> u8 {
        match self {
            Operation::ReadHoldings { .. } => 3,
            Operation::ReadInputs { .. } => 4,
            Operation::WriteHolding { .. } => 6,
            Operation::WriteHoldings { .. } => 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub unit_id: u8,
    pub transaction_id: u16,
    pub kind: ResponseKind,
}

impl Response {
    pub fn exception_code(&self) -> Option<u8> {
        match &self.kind {
            ResponseKind::Exception { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_server_busy(&self) -> bool {
        self.exception_code() == Some(6)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    Exception { function: u8, code: u8 },
    /// Words returned by a read of either holding or input registers.
    Registers { function: u8, values: Vec<u16> },
    /// Echo of a single register write. The address is 0-based, as on the wire.
    WriteHolding { address: u16, value: u16 },
    /// Acknowledgement of a multiple register write. The address is 0-based, as on the wire.
    WriteHoldings { address: u16, count: u16 },
}

pub fn exception_name(code: u8) -> &'static str {
    match code {
        1 => "illegal function",
        2 => "illegal data address",
        3 => "illegal data value",
        4 => "server device failure",
        5 => "acknowledge",
        6 => "server device busy",
        10 => "gateway path unavailable",
        11 => "gateway target device failed to respond",
        _ => "unknown exception",
    }
}

fn wire_address(address: u16) -> Result<u16, std::io::Error> {
    address.checked_sub(1).ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "register addresses start at 1")
    })
}

pub struct ModbusTcpCodec {}

impl Encoder<&Request> for ModbusTcpCodec {
    type Error = std::io::Error;
    fn encode(&mut self, req: &Request, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let mut pdu = Vec::with_capacity(6);
        pdu.push(req.operation.function_code());
        match &req.operation {
            Operation::ReadHoldings { address, count } | Operation::ReadInputs { address, count } => {
                pdu.extend(wire_address(*address)?.to_be_bytes());
                pdu.extend(count.to_be_bytes());
            }
            Operation::WriteHolding { address, value } => {
                pdu.extend(wire_address(*address)?.to_be_bytes());
                pdu.extend(value.to_be_bytes());
            }
            Operation::WriteHoldings { address, values } => {
                let count = u16::try_from(values.len())
                    .ok()
                    .filter(|c| (1..=MAX_WRITE_COUNT).contains(c))
                    .ok_or_else(|| {
                        std::io::Error::new(
                            std::io::ErrorKind::InvalidInput,
                            "too many or too few registers in one write",
                        )
                    })?;
                pdu.extend(wire_address(*address)?.to_be_bytes());
                pdu.extend(count.to_be_bytes());
                // Bounded by MAX_WRITE_COUNT above.
                pdu.push((count * 2) as u8);
                for value in values {
                    pdu.extend(value.to_be_bytes());
                }
            }
        }
        // The length field counts the unit id along with the PDU.
        let length = (pdu.len() + 1) as u16;
        dst.reserve(HEADER_LENGTH + pdu.len());
        dst.put_u16(req.transaction_id);
        dst.put_u16(0);
        dst.put_u16(length);
        dst.put_u8(req.unit_id);
        dst.extend_from_slice(&pdu);
        trace!(message = "sending encoded", buffer = ?dst);
        Ok(())
    }
}

impl Decoder for ModbusTcpCodec {
    type Item = Response;
    type Error = std::io::Error;
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            trace!(message = "attempt at decoding", buffer = ?src);
            let Some(header) = src.first_chunk::<HEADER_LENGTH>() else {
                return Ok(None);
            };
            let transaction_id = u16::from_be_bytes([header[0], header[1]]);
            let protocol = u16::from_be_bytes([header[2], header[3]]);
            let length = usize::from(u16::from_be_bytes([header[4], header[5]]));
            let unit_id = header[6];
            if protocol != 0 || length < 2 {
                // Not a frame boundary, look for one further along.
                src.advance(1);
                continue;
            }
            let frame_length = HEADER_LENGTH - 1 + length;
            if src.len() < frame_length {
                src.reserve(frame_length - src.len());
                return Ok(None);
            }
            let frame = src.split_to(frame_length);
            let pdu = &frame[HEADER_LENGTH..];
            let Some(kind) = decode_pdu(pdu) else {
                debug!(message = "skipping a frame we do not understand", transaction_id, ?pdu);
                continue;
            };
            return Ok(Some(Response {
                unit_id,
                transaction_id,
                kind,
            }));
        }
    }
}

fn decode_pdu(pdu: &[u8]) -> Option<ResponseKind> {
    let (&function, data) = pdu.split_first()?;
    let word = |offset: usize| -> Option<u16> {
        let bytes = data.get(offset..offset + 2)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    };
    Some(match function {
        f if f & 0x80 != 0 => ResponseKind::Exception {
            function: f & 0x7F,
            code: *data.first()?,
        },
        3 | 4 => {
            // The byte count is redundant with the frame length, so the latter is trusted.
            let (_byte_count, values) = data.split_first()?;
            ResponseKind::Registers {
                function,
                values: values
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect(),
            }
        }
        6 => ResponseKind::WriteHolding {
            address: word(0)?,
            value: word(2)?,
        },
        16 => ResponseKind::WriteHoldings {
            address: word(0)?,
            count: word(2)?,
        },
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(operation: Operation) -> Vec<u8> {
        let mut dst = BytesMut::new();
        let request = Request {
            unit_id: 1,
            transaction_id: 0x0102,
            operation,
        };
        ModbusTcpCodec {}.encode(&request, &mut dst).unwrap();
        dst.to_vec()
    }

    #[test]
    fn encodes_reads_with_zero_based_addresses() {
        assert_eq!(
            encode(Operation::ReadInputs {
                address: 501,
                count: 110
            }),
            [1, 2, 0, 0, 0, 6, 1, 4, 0x01, 0xF4, 0, 110]
        );
        assert_eq!(
            encode(Operation::ReadHoldings {
                address: 1501,
                count: 21
            }),
            [1, 2, 0, 0, 0, 6, 1, 3, 0x05, 0xDC, 0, 21]
        );
    }

    #[test]
    fn encodes_writes() {
        assert_eq!(
            encode(Operation::WriteHolding {
                address: 1520,
                value: 3
            }),
            [1, 2, 0, 0, 0, 6, 1, 6, 0x05, 0xEF, 0, 3]
        );
        assert_eq!(
            encode(Operation::WriteHoldings {
                address: 1502,
                values: vec![215, 0xFFFE]
            }),
            [1, 2, 0, 0, 0, 11, 1, 16, 0x05, 0xDD, 0, 2, 4, 0, 215, 0xFF, 0xFE]
        );
    }

    #[test]
    fn refuses_to_encode_nonsense() {
        let mut dst = BytesMut::new();
        let mut codec = ModbusTcpCodec {};
        let request = |operation| Request {
            unit_id: 1,
            transaction_id: 0,
            operation,
        };
        let zero = request(Operation::ReadInputs {
            address: 0,
            count: 1,
        });
        assert!(codec.encode(&zero, &mut dst).is_err());
        let empty = request(Operation::WriteHoldings {
            address: 1,
            values: vec![],
        });
        assert!(codec.encode(&empty, &mut dst).is_err());
        let huge = request(Operation::WriteHoldings {
            address: 1,
            values: vec![0; 124],
        });
        assert!(codec.encode(&huge, &mut dst).is_err());
    }

    #[test]
    fn decodes_register_values() {
        let mut src = BytesMut::from(&[0, 7, 0, 0, 0, 7, 1, 4, 4, 0x00, 0xD7, 0x80, 0x00][..]);
        let response = ModbusTcpCodec {}.decode(&mut src).unwrap().unwrap();
        assert_eq!(response.transaction_id, 7);
        assert_eq!(response.unit_id, 1);
        assert_eq!(
            response.kind,
            ResponseKind::Registers {
                function: 4,
                values: vec![215, 0x8000]
            }
        );
        assert!(src.is_empty());
    }

    #[test]
    fn decodes_exceptions() {
        let mut src = BytesMut::from(&[0, 9, 0, 0, 0, 3, 1, 0x83, 2][..]);
        let response = ModbusTcpCodec {}.decode(&mut src).unwrap().unwrap();
        assert_eq!(
            response.kind,
            ResponseKind::Exception {
                function: 3,
                code: 2
            }
        );
        assert_eq!(response.exception_code(), Some(2));
        assert!(!response.is_server_busy());
        assert_eq!(exception_name(2), "illegal data address");
    }

    #[test]
    fn waits_for_a_complete_frame() {
        let mut codec = ModbusTcpCodec {};
        let mut src = BytesMut::from(&[0, 1, 0, 0, 0, 6, 1, 6, 0x05][..]);
        assert_eq!(codec.decode(&mut src).unwrap(), None);
        src.extend_from_slice(&[0xEF, 0, 3]);
        let response = codec.decode(&mut src).unwrap().unwrap();
        assert_eq!(
            response.kind,
            ResponseKind::WriteHolding {
                address: 1519,
                value: 3
            }
        );
    }

    #[test]
    fn skips_frames_it_does_not_understand() {
        let mut codec = ModbusTcpCodec {};
        let mut src = BytesMut::from(
            &[
                0xAA, // garbage
                0, 1, 0, 0, 0, 3, 1, 0x2B, 0, // unsupported function
                0, 2, 0, 0, 0, 6, 1, 16, 0x05, 0xDD, 0, 2, // write multiple
            ][..],
        );
        let response = codec.decode(&mut src).unwrap().unwrap();
        assert_eq!(response.transaction_id, 2);
        assert_eq!(
            response.kind,
            ResponseKind::WriteHoldings {
                address: 1501,
                count: 2
            }
        );
        assert_eq!(codec.decode(&mut src).unwrap(), None);
    }
}
