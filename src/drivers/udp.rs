// Touch-ESP - UDP Event Transport
//
// One datagram per record to the fixed collector address.  The socket is
// non-blocking; a send that cannot complete right away is reported as a
// failure and dropped.

use std::net::{SocketAddr, UdpSocket};

use anyhow::Context;

use touch_events::EventTransport;

use crate::drivers::wifi::WifiLink;

pub struct UdpTransport {
    socket: UdpSocket,
    target: SocketAddr,
    link: WifiLink,
}

impl UdpTransport {
    pub fn new(target: &str, link: WifiLink) -> anyhow::Result<Self> {
        let target: SocketAddr = target
            .parse()
            .with_context(|| format!("invalid collector address '{}'", target))?;

        let socket = UdpSocket::bind("0.0.0.0:0").context("binding UDP socket")?;
        socket.set_nonblocking(true)?;

        log::info!("UDP events -> {}", target);
        Ok(Self {
            socket,
            target,
            link,
        })
    }

    /// Keep the underlying Wi-Fi association alive.
    pub fn maintain_link(&mut self, now: u64) {
        self.link.maintain(now);
    }
}

impl EventTransport for UdpTransport {
    fn is_ready(&self) -> bool {
        self.link.is_up()
    }

    fn send(&mut self, payload: &[u8]) -> anyhow::Result<()> {
        let written = self
            .socket
            .send_to(payload, self.target)
            .with_context(|| format!("sending to {}", self.target))?;

        if written != payload.len() {
            anyhow::bail!("short datagram: {} of {} bytes", written, payload.len());
        }
        Ok(())
    }
}
