// Listener construction
// Builds the TCP listener by hand so socket options are explicit.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a nonblocking `TcpListener` bound to `addr`.
///
/// `SO_REUSEADDR` is set first: a dev server is restarted constantly, and
/// waiting out sockets in TIME_WAIT from the previous run would turn every
/// restart into an "address already in use" error.
pub fn bind(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    // Match the socket domain to the address family (IPv4 or IPv6)
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // Non-blocking before the socket is handed to tokio
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_an_ephemeral_port() {
        let listener = bind("127.0.0.1:0".parse().expect("addr")).expect("bind");
        let local = listener.local_addr().expect("local addr");
        assert_ne!(local.port(), 0);
    }

    #[tokio::test]
    async fn rebinding_a_released_port_succeeds() {
        let first = bind("127.0.0.1:0".parse().expect("addr")).expect("bind");
        let addr = first.local_addr().expect("local addr");
        drop(first);
        bind(addr).expect("rebind after drop");
    }
}
