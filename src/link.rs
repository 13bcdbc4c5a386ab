use std::io::Write;
use std::net::{Shutdown, SocketAddr, TcpStream};

use eyre::{eyre, Result};
use log::{debug, info};

/// Every transmission is exactly this many bytes; the visualizer knows
/// the size out of band and treats each packet as one scan line.
pub const PACKET_LEN: usize = 2048;

/// Sentinel at the head of a reset packet.
pub const RESET_SENTINEL: &[u8; 5] = b"RESET";

#[derive(Clone, Copy, Debug)]
pub struct LinkConfig {
    pub addr: SocketAddr,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 32023)),
        }
    }
}

/// Pixel bit-packing mode on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Threshold mode: a channel is full-scale if its input is non-zero.
    Mono,
    /// 4-bit hardware color scaled into the top nibble of each byte lane.
    Scaled,
}

/// Output transport buffer. One 3-byte slot per pixel, slot `n` at byte
/// offset `3 * n`; trailing slots stay zero-filled.
pub struct PacketBuffer {
    bytes: [u8; PACKET_LEN],
}

impl PacketBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0; PACKET_LEN],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn set_pixel(&mut self, encoding: Encoding, slot: usize, r: u8, g: u8, b: u8) {
        match encoding {
            Encoding::Mono => self.set_pixel_mono(slot, r, g, b),
            Encoding::Scaled => self.set_pixel_scaled(slot, r, g, b),
        }
    }

    pub fn set_pixel_mono(&mut self, slot: usize, r: u8, g: u8, b: u8) {
        let base = self.slot_base(slot);
        self.bytes[base] = if r != 0 { 0xFF } else { 0x00 };
        self.bytes[base + 1] = if g != 0 { 0xFF } else { 0x00 };
        self.bytes[base + 2] = if b != 0 { 0xFF } else { 0x00 };
    }

    pub fn set_pixel_scaled(&mut self, slot: usize, r: u8, g: u8, b: u8) {
        let base = self.slot_base(slot);
        self.bytes[base] = (r & 0x0F) << 4;
        self.bytes[base + 1] = (g & 0x0F) << 4;
        self.bytes[base + 2] = (b & 0x0F) << 4;
    }

    fn slot_base(&self, slot: usize) -> usize {
        if (slot + 1) * 3 > PACKET_LEN {
            panic!(
                "Pixel slot {} does not fit a {}-byte packet",
                slot, PACKET_LEN
            );
        }
        slot * 3
    }
}

impl Default for PacketBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Client side of the visualizer link: one blocking TCP connection for
/// the session, fixed-size packets, no acknowledgements.
pub struct SimLink {
    stream: Option<TcpStream>,
    pub buffer: PacketBuffer,
}

impl SimLink {
    pub fn connect(config: LinkConfig) -> Result<Self> {
        let stream = TcpStream::connect(config.addr)?;
        info!("Connected to visualizer @ {}", config.addr);
        Ok(Self {
            stream: Some(stream),
            buffer: PacketBuffer::new(),
        })
    }

    /// Tell the visualizer to clear its display: a full packet whose
    /// first 5 bytes are the sentinel and the rest zero.
    pub fn send_reset(&mut self) -> Result<()> {
        self.buffer.clear();
        self.buffer.bytes[..RESET_SENTINEL.len()].copy_from_slice(RESET_SENTINEL);
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| eyre!("Link is not connected"))?;
        stream.write_all(&self.buffer.bytes)?;
        debug!("Sent reset packet ({} bytes)", PACKET_LEN);
        self.buffer.clear();
        Ok(())
    }

    /// Transmit the whole buffer, populated slots and zero tail alike,
    /// then clear it for the next packet.
    pub fn send_frame(&mut self) -> Result<()> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| eyre!("Link is not connected"))?;
        stream.write_all(&self.buffer.bytes)?;
        debug!("Sent data packet ({} bytes)", PACKET_LEN);
        self.buffer.clear();
        Ok(())
    }

    /// Safe to call at any point, including after a transport error or
    /// a previous close.
    pub fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(Shutdown::Both);
            info!("Closed visualizer link");
        }
    }
}
