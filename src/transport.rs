//! Length-prefixed bincode framing over TCP.
//!
//! A frame is a `u32` big-endian payload length followed by the bincode
//! payload. Frame size is bounded to keep a malformed peer from forcing a
//! huge allocation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};

/// Frame size cap. A 10×10 matrix request is a few hundred bytes.
const MAX_FRAME_SIZE: u32 = 1_048_576;

/// A framed message stream over one TCP connection.
pub struct Framed {
    stream: TcpStream,
}

impl Framed {
    pub fn new(stream: TcpStream) -> Self {
        Framed { stream }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        Ok(Framed::new(TcpStream::connect(addr).await?))
    }

    pub async fn send<T: Serialize>(&mut self, msg: &T) -> anyhow::Result<()> {
        let data = bincode::serialize(msg)
            .map_err(|e| anyhow::anyhow!("serialization error: {}", e))?;
        if data.len() > MAX_FRAME_SIZE as usize {
            return Err(anyhow::anyhow!(
                "frame too large: {} bytes (max: {})",
                data.len(),
                MAX_FRAME_SIZE
            ));
        }
        self.stream
            .write_all(&(data.len() as u32).to_be_bytes())
            .await?;
        self.stream.write_all(&data).await?;
        Ok(())
    }

    pub async fn recv<T: DeserializeOwned>(&mut self) -> anyhow::Result<T> {
        let mut len_buf = [0u8; 4];
        self.stream.read_exact(&mut len_buf).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                anyhow::anyhow!("connection closed by peer")
            } else {
                anyhow::anyhow!("read error: {}", e)
            }
        })?;
        let len = u32::from_be_bytes(len_buf);
        if len == 0 || len > MAX_FRAME_SIZE {
            return Err(anyhow::anyhow!("invalid frame length: {}", len));
        }
        let mut buf = vec![0u8; len as usize];
        self.stream.read_exact(&mut buf).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                anyhow::anyhow!("connection closed by peer")
            } else {
                anyhow::anyhow!("read error: {}", e)
            }
        })?;
        bincode::deserialize(&buf).map_err(|e| anyhow::anyhow!("deserialization error: {}", e))
    }
}
