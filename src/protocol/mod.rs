pub mod byte_packet_buffer;
pub mod dns_header;
pub mod dns_packet;
pub mod dns_question;
pub mod error;
pub mod query_type;

pub use error::DecodeError;

pub type Result<T> = std::result::Result<T, DecodeError>;
