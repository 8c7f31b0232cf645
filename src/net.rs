//! Connection establishment for both roles.
//!
//! The sender listens on all interfaces and serves exactly one connection;
//! the listener is dropped the moment the peer is accepted. The receiver
//! resolves the configured host name and connects. Every failure here is
//! fatal for the process: this is a single-shot tool with no retry path.

use crate::error::TransferError;
use socket2::{Domain, Socket, Type};
use std::net::{Ipv4Addr, SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing::{debug, info};

/// Bind a listening socket on all interfaces.
///
/// `SO_REUSEADDR` keeps quick restarts from tripping over the previous
/// run's TIME_WAIT state; `SO_LINGER {on, 0}` releases the port without
/// lingering once the listener is dropped. Backlog is 1; a second client
/// has nothing to connect to anyway.
pub fn bind(port: u16) -> Result<TcpListener, TransferError> {
    let bind_err = |source| TransferError::Bind { port, source };

    let socket = Socket::new(Domain::IPV4, Type::STREAM, None).map_err(bind_err)?;
    socket.set_reuse_address(true).map_err(bind_err)?;
    socket.set_linger(Some(Duration::ZERO)).map_err(bind_err)?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    socket.bind(&addr.into()).map_err(bind_err)?;
    socket.listen(1).map_err(bind_err)?;

    let listener: TcpListener = socket.into();
    info!(port = listener.local_addr().map(|a| a.port()).unwrap_or(port), "listening");
    Ok(listener)
}

/// Accept exactly one connection and drop the listener.
pub fn accept_one(listener: TcpListener) -> Result<TcpStream, TransferError> {
    let (stream, peer) = listener.accept().map_err(TransferError::Accept)?;
    info!(peer = %peer, "peer connected");
    // No further connections are served; the listening port is released now.
    drop(listener);
    Ok(stream)
}

/// Resolve a host name and connect to the first address it yields.
pub fn resolve_and_connect(host: &str, port: u16) -> Result<TcpStream, TransferError> {
    let mut addrs = (host, port)
        .to_socket_addrs()
        .map_err(|e| TransferError::Resolution {
            host: host.to_string(),
            reason: e.to_string(),
        })?;
    let addr = addrs.next().ok_or_else(|| TransferError::Resolution {
        host: host.to_string(),
        reason: "no addresses found".to_string(),
    })?;
    debug!(host, %addr, "resolved");

    let stream = TcpStream::connect(addr).map_err(|e| TransferError::Connect {
        addr: addr.to_string(),
        source: e,
    })?;
    info!(%addr, "connected");
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_bind_accept_connect_roundtrip() {
        let listener = bind(0).unwrap();
        let port = listener.local_addr().unwrap().port();

        let client = thread::spawn(move || resolve_and_connect("127.0.0.1", port));

        let accepted = accept_one(listener).unwrap();
        let connected = client.join().unwrap().unwrap();

        assert_eq!(
            accepted.local_addr().unwrap().port(),
            connected.peer_addr().unwrap().port()
        );
    }

    #[test]
    fn test_resolution_failure() {
        // .invalid is reserved and never resolves.
        let result = resolve_and_connect("host.invalid", 1234);
        assert!(matches!(result, Err(TransferError::Resolution { .. })));
    }

    #[test]
    fn test_connect_refused() {
        // Bind then immediately drop to get a port with nothing listening.
        let listener = bind(0).unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let result = resolve_and_connect("127.0.0.1", port);
        assert!(matches!(result, Err(TransferError::Connect { .. })));
    }
}
