use std::fmt;

use super::{byte_packet_buffer::BytePacketBuffer, query_type::QueryType, DecodeError, Result};

/// Longest label allowed after its length octet.
pub const MAX_LABEL_LEN: usize = 63;
/// Longest encoded name, length octets and terminator included.
pub const MAX_NAME_LEN: usize = 255;

/// Domain name as a sequence of raw labels, in wire order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QName(Vec<Vec<u8>>);

impl QName {
    pub fn new(labels: Vec<Vec<u8>>) -> QName {
        QName(labels)
    }

    /// Decode a length-prefixed name starting at the cursor.
    ///
    /// The cursor ends up just past the zero terminator. Compression pointers
    /// (`0b11` prefix) and extended label types (`0b01`/`0b10`) are rejected.
    pub fn read(buffer: &mut BytePacketBuffer) -> Result<QName> {
        let start = buffer.pos();
        let mut labels = Vec::new();

        loop {
            let offset = buffer.pos();
            let len = buffer.read().map_err(|_| DecodeError::MalformedName {
                offset,
                reason: "missing zero terminator",
            })?;

            if len == 0 {
                break;
            }

            if len as usize > MAX_LABEL_LEN {
                return Err(DecodeError::UnsupportedEncoding {
                    offset,
                    marker: len,
                });
            }

            let label = buffer
                .read_range(len as usize)
                .map_err(|_| DecodeError::MalformedName {
                    offset,
                    reason: "label runs past end of packet",
                })?;
            labels.push(label.to_vec());

            // +1 for the terminator still to come
            if buffer.pos() - start + 1 > MAX_NAME_LEN {
                return Err(DecodeError::MalformedName {
                    offset: start,
                    reason: "name longer than 255 octets",
                });
            }
        }

        Ok(QName(labels))
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Octets this name occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        self.0.iter().map(|label| label.len() + 1).sum::<usize>() + 1
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&String::from_utf8_lossy(label))?;
        }
        Ok(())
    }
}

/// RFC 1035 4.1.2 question entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: QName,
    pub qtype: u16,
    pub qclass: u16,
}

impl DnsQuestion {
    pub fn read(buffer: &mut BytePacketBuffer) -> Result<DnsQuestion> {
        let name = QName::read(buffer)?;
        let fields = buffer.read_range(4)?;

        Ok(DnsQuestion {
            name,
            qtype: u16::from_be_bytes([fields[0], fields[1]]),
            qclass: u16::from_be_bytes([fields[2], fields[3]]),
        })
    }

    pub fn query_type(&self) -> QueryType {
        QueryType::from_num(self.qtype)
    }

    /// Octets this question occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        self.name.encoded_len() + 4
    }
}

impl fmt::Display for DnsQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
