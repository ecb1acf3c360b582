use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::UdpSocket;

use crate::{config::ServerSettings, networking::handler::handle_datagram};

/// Classic UDP transport limit for one message.
pub const MAX_DATAGRAM_SIZE: usize = 512;

/// Receive datagrams on `socket` until Ctrl-C.
pub async fn serve(socket: UdpSocket) -> anyhow::Result<()> {
    let mut buf = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        tokio::select! {
            received = socket.recv_from(&mut buf) => match received {
                Ok((size, peer)) => {
                    // failures are already logged by the handler
                    let _ = handle_datagram(peer, &buf[..size]);
                }
                Err(err) => log::error!("recv_from error: {err}"),
            },
            _ = tokio::signal::ctrl_c() => {
                log::info!("shutting down");
                return Ok(());
            }
        }
    }
}

pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    let socket = UdpSocket::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("listening on udp://{}", socket.local_addr()?);
    serve(socket).await
}

pub async fn run_server_with_config(config: &ServerSettings) -> anyhow::Result<()> {
    let raw = format!("{}:{}", config.bind, config.port);
    let addr = raw
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid listen address {raw}"))?;
    run_server(addr).await
}
