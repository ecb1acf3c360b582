use super::{byte_packet_buffer::BytePacketBuffer, Result};

/// Fixed size of the header in octets.
pub const HEADER_LEN: usize = 12;

const QR_MASK: u8 = 0b1000_0000;
const OPCODE_MASK: u8 = 0b0111_1000;
const OPCODE_SHIFT: u8 = 3;
const AA_MASK: u8 = 0b0000_0100;
const TC_MASK: u8 = 0b0000_0010;
const RD_MASK: u8 = 0b0000_0001;
const RA_MASK: u8 = 0b1000_0000;

/// RFC 1035 4.1.1 header.
///
/// Only the fields needed to walk the question section are decoded. The
/// remaining bits are left unread:
/// - byte 3 bits 6-4: Z, reserved
/// - byte 3 bits 3-0: RCODE
/// - bytes 6-7: ANCOUNT
/// - bytes 8-9: NSCOUNT
/// - bytes 10-11: ARCOUNT
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsHeader {
    /// Identifier copied into the reply so the requester can match it up.
    pub id: u16,
    /// Query (false) or response (true).
    pub qr: bool,
    /// Kind of query, 0-15.
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    /// Number of entries in the question section.
    pub qdcount: u16,
}

impl DnsHeader {
    /// Decode the header from the first 12 bytes of `buffer`.
    pub fn read(buffer: &mut BytePacketBuffer) -> Result<DnsHeader> {
        let raw = buffer.read_range(HEADER_LEN)?;

        Ok(DnsHeader {
            id: u16::from_be_bytes([raw[0], raw[1]]),
            qr: qr(raw[2]),
            opcode: opcode(raw[2]),
            aa: aa(raw[2]),
            tc: tc(raw[2]),
            rd: rd(raw[2]),
            ra: ra(raw[3]),
            qdcount: u16::from_be_bytes([raw[4], raw[5]]),
        })
    }
}

/// Byte 2, bit 7.
fn qr(flags: u8) -> bool {
    flags & QR_MASK != 0
}

/// Byte 2, bits 6-3, shifted down to 0-15.
fn opcode(flags: u8) -> u8 {
    (flags & OPCODE_MASK) >> OPCODE_SHIFT
}

/// Byte 2, bit 2.
fn aa(flags: u8) -> bool {
    flags & AA_MASK != 0
}

/// Byte 2, bit 1.
fn tc(flags: u8) -> bool {
    flags & TC_MASK != 0
}

/// Byte 2, bit 0.
fn rd(flags: u8) -> bool {
    flags & RD_MASK != 0
}

/// Byte 3, bit 7.
fn ra(flags: u8) -> bool {
    flags & RA_MASK != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::DecodeError;

    fn header(bytes: &[u8]) -> Result<DnsHeader> {
        DnsHeader::read(&mut BytePacketBuffer::new(bytes))
    }

    #[test]
    fn decodes_id_and_counts() {
        let h = header(&[0x30, 0x39, 0x81, 0x00, 0x00, 0x02, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(h.id, 12345);
        assert!(h.qr);
        assert!(h.rd);
        assert_eq!(h.qdcount, 2);
    }

    #[test]
    fn opcode_is_shifted_into_low_bits() {
        // opcode 2 (STATUS) sits in bits 6-3 as 0b0001_0000
        let h = header(&[0, 0, 0b0001_0000, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(h.opcode, 2);

        let h = header(&[0, 0, 0b0111_1000, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(h.opcode, 15);
        assert!(!h.qr);
    }

    #[test]
    fn decodes_each_flag_bit() {
        let h = header(&[0, 0, 0b0000_0110, 0b1000_0000, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert!(h.aa);
        assert!(h.tc);
        assert!(!h.rd);
        assert!(h.ra);
        assert_eq!(h.opcode, 0);
    }

    #[test]
    fn unread_bits_do_not_leak_into_fields() {
        // Z, RCODE and the RR counts all set
        let h = header(&[0, 0, 0, 0b0111_1111, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]).unwrap();
        assert!(!h.ra);
        assert_eq!(h.qdcount, 0);
    }

    #[test]
    fn short_input_is_rejected() {
        assert_eq!(
            header(&[0; 11]),
            Err(DecodeError::TooShort {
                needed: 12,
                actual: 11
            })
        );
    }
}
