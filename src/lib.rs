//! Decoder for the header and question section of RFC 1035 messages, plus
//! the small UDP listener that logs what it decodes.

pub mod config;
pub mod logs;
pub mod networking;
pub mod protocol;
pub mod utils;

pub use protocol::{dns_packet::DnsPacket, DecodeError};
