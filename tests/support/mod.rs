#![allow(dead_code)]

use teleinfo::{
    avec::{Clock, Transport},
    sans::check::compute_checksum,
};

/// A clock that only moves forward when slept on.
#[derive(Debug, Default)]
pub struct FakeClock {
    pub now: u32,
    pub slept: u32,
}

impl FakeClock {
    pub fn at(now: u32) -> Self {
        Self { now, slept: 0 }
    }
}

impl Clock for FakeClock {
    fn millis(&self) -> u32 {
        self.now
    }

    fn delay(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
        self.slept += ms;
    }
}

/// A transport replaying bytes and recording lifecycle calls.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    pub data: Vec<u8>,
    pub position: usize,
    pub flushes: usize,
    pub baud: Option<u32>,
    pub ended: bool,
}

impl ScriptedTransport {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            ..Default::default()
        }
    }
}

impl Transport for ScriptedTransport {
    fn available(&mut self) -> bool {
        self.position < self.data.len()
    }

    fn read(&mut self) -> u8 {
        let b = self.data[self.position];
        self.position += 1;
        b
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }

    fn begin(&mut self, baud: u32) {
        self.baud = Some(baud);
    }

    fn end(&mut self) {
        self.ended = true;
    }
}

/// An information block as sent by a historical meter.
pub fn historical_block(key: &str, value: &str) -> Vec<u8> {
    let mut block = format!("{key} {value}").into_bytes();
    let checksum = compute_checksum(&block);
    block.push(b' ');
    block.push(checksum);
    block
}

/// An information block as sent by a standard meter.
pub fn standard_block(key: &str, date: Option<&str>, value: &str) -> Vec<u8> {
    let mut block = match date {
        Some(date) => format!("{key}\t{date}\t{value}\t"),
        None => format!("{key}\t{value}\t"),
    }
    .into_bytes();
    block.push(compute_checksum(&block));
    block
}

/// A frame wrapping information blocks in their markers.
pub fn frame(blocks: &[&[u8]]) -> Vec<u8> {
    let mut frame = vec![0x02];
    for block in blocks {
        frame.push(0x0A);
        frame.extend_from_slice(block);
        frame.push(0x0D);
    }
    frame.push(0x03);
    frame
}

pub fn text(r: Option<&[u8]>) -> Option<&str> {
    r.map(|r| std::str::from_utf8(r).unwrap())
}
