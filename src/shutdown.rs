//! The end-of-transfer close protocol.
//!
//! The stream carries no framing, so the receiver learns the transfer is
//! complete only by reading zero bytes after the sender shuts down its write
//! direction. The sender in turn must not tear the full-duplex socket down
//! until the receiver has acknowledged consuming everything by closing its
//! own side, otherwise the receiver can observe a connection reset instead
//! of a clean close.
//!
//! Sender:   TRANSFERRING -> shutdown(Write) -> drain read -> drop
//! Receiver: RECEIVING -> zero read -> shutdown(Write) -> drop

use crate::error::TransferError;
use std::io::{self, Read};
use std::net::{Shutdown, TcpStream};
use tracing::debug;

/// Sender side: half-close the write direction, then block until the
/// receiver closes its side.
///
/// The drain read is a rendezvous, not a data transfer; anything it
/// returns is discarded. Only the zero-length read (peer closed) lets the
/// sender proceed to drop the socket.
pub fn drain_and_close(mut stream: TcpStream) -> Result<(), TransferError> {
    stream
        .shutdown(Shutdown::Write)
        .map_err(TransferError::Close)?;
    debug!("write side shut down, draining");

    let mut probe = [0u8; 1];
    loop {
        match stream.read(&mut probe) {
            Ok(0) => break, // peer closed; safe to release the socket
            Ok(_) => continue,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(TransferError::Close(e)),
        }
    }
    debug!("peer closed, releasing socket");
    Ok(())
}

/// Receiver side: signal the sender that everything was consumed, then
/// release the socket. The local file must already be closed by the caller.
pub fn acknowledge_close(stream: TcpStream) -> Result<(), TransferError> {
    stream
        .shutdown(Shutdown::Write)
        .map_err(TransferError::Close)?;
    debug!("close acknowledged");
    Ok(())
}
