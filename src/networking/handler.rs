use std::net::SocketAddr;

use crate::{
    protocol::{dns_packet::DnsPacket, Result},
    utils::hex_dump,
};

/// Decode one datagram and log what was asked.
///
/// Undecodable datagrams are logged and dropped; nothing is sent back.
pub fn handle_datagram(peer: SocketAddr, data: &[u8]) -> Result<DnsPacket> {
    log::info!("request from {} ({} bytes)", peer, data.len());
    log::debug!("raw {}: {}", peer, hex_dump(data));

    let packet = match DnsPacket::parse(data) {
        Ok(packet) => packet,
        Err(err) => {
            log::warn!("dropping datagram from {}: {}", peer, err);
            return Err(err);
        }
    };

    log::debug!("decoded {}: {:?}", peer, packet);
    for question in packet.questions() {
        log::info!(
            "client {} asked {} {} class {}",
            peer,
            question.name,
            question.query_type(),
            question.qclass,
        );
    }

    Ok(packet)
}
