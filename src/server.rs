//! TCP front end: accepts connections and relays engine results verbatim.

use std::sync::Arc;

use tokio::net::{TcpListener, TcpStream};

use crate::protocol::{Request, Response};
use crate::registry::GameServer;
use crate::transport::Framed;

/// Map one request onto the engine. Caller errors come back as `Rejected`
/// responses; the engine has no other failure class to surface.
pub fn dispatch(server: &GameServer, request: Request) -> Response {
    match request {
        Request::Register => Response::Registered {
            player: server.register(),
        },
        Request::Status { player } => match server.status(player) {
            Ok(status) => Response::Status(status),
            Err(e) => Response::Rejected(e),
        },
        Request::SubmitField { player, field } => match server.submit_field(player, &field) {
            Ok(summary) => Response::FieldAccepted(summary),
            Err(e) => Response::Rejected(e),
        },
        Request::Attack { player, x, y } => {
            match server.attack(player, x as usize, y as usize) {
                Ok(result) => Response::Attack(result),
                Err(e) => Response::Rejected(e),
            }
        }
    }
}

/// Accept connections on `listener` and serve the engine until the task is
/// dropped.
pub async fn serve(listener: TcpListener, server: Arc<GameServer>) -> anyhow::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        log::info!("connection from {}", peer);
        let server = Arc::clone(&server);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, server).await {
                log::debug!("connection {} closed: {}", peer, e);
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, server: Arc<GameServer>) -> anyhow::Result<()> {
    let mut framed = Framed::new(stream);
    loop {
        let request: Request = framed.recv().await?;
        let response = dispatch(&server, request);
        log::debug!("response: {:?}", response);
        framed.send(&response).await?;
    }
}
