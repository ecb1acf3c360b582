use super::{
    byte_packet_buffer::BytePacketBuffer,
    dns_header::{DnsHeader, HEADER_LEN},
    dns_question::DnsQuestion,
    DecodeError, Result,
};

/// Decoded header and question section of one datagram.
///
/// Resource-record sections are not decoded; any bytes after the last
/// question are left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsPacket {
    pub header: DnsHeader,
    questions: Vec<DnsQuestion>,
}

impl DnsPacket {
    /// Decode a raw datagram payload.
    ///
    /// Fails without returning a partial packet when the header is short,
    /// a name is malformed or unsupported, or fewer than `qdcount`
    /// questions fit in the buffer.
    pub fn parse(packet: &[u8]) -> Result<DnsPacket> {
        if packet.len() < HEADER_LEN {
            return Err(DecodeError::TooShort {
                needed: HEADER_LEN,
                actual: packet.len(),
            });
        }

        let mut buffer = BytePacketBuffer::new(packet);
        let header = DnsHeader::read(&mut buffer)?;

        let mut questions = Vec::with_capacity(header.qdcount as usize);
        for decoded in 0..header.qdcount {
            if buffer.remaining() == 0 {
                return Err(DecodeError::Truncated {
                    decoded,
                    expected: header.qdcount,
                });
            }
            questions.push(DnsQuestion::read(&mut buffer)?);
        }

        Ok(DnsPacket { header, questions })
    }

    pub fn questions(&self) -> &[DnsQuestion] {
        &self.questions
    }
}
