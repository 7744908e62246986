//! Register-level model of the PHY, clock generator and test word.

use std::vec::Vec;
use regs::{Registers, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Write(Signal, u8),
    WriteWord(u32),
    ReadWord(u32),
    FlushL2,
    FlushDcache,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Memory {
    /// Latches every write.
    Healthy,
    /// Ignores writes and keeps returning its power-on contents.
    Stuck,
    /// Latches writes only while the clock delay line is within `lo..=hi` taps.
    Eye(u8, u8),
}

pub struct SimPhy {
    pub accesses: Vec<Access>,
    pub memory: Memory,
    pub cell: u32,
    pub clk_taps: u8,
    pub io_taps: u8,
    pub null_steps: u32,
    pub up_steps: u32,
    pub hr2x90_slips: u32,
    pub hr2x_slips: u32,
    lines: [u8; 11],
}

impl SimPhy {
    pub fn new(memory: Memory, cell: u32) -> SimPhy {
        SimPhy {
            accesses: Vec::new(),
            memory: memory,
            cell: cell,
            clk_taps: 0,
            io_taps: 0,
            null_steps: 0,
            up_steps: 0,
            hr2x90_slips: 0,
            hr2x_slips: 0,
            lines: [0; 11],
        }
    }

    pub fn writes(&self) -> Vec<(Signal, u8)> {
        self.accesses.iter()
            .filter_map(|access| match *access {
                Access::Write(signal, value) => Some((signal, value)),
                _ => None
            })
            .collect()
    }

    pub fn line(&self, signal: Signal) -> u8 {
        self.lines[signal as usize]
    }

    fn stores(&self) -> bool {
        match self.memory {
            Memory::Healthy => true,
            Memory::Stuck => false,
            Memory::Eye(lo, hi) => self.clk_taps >= lo && self.clk_taps <= hi,
        }
    }
}

impl Registers for SimPhy {
    fn write(&mut self, signal: Signal, value: u8) {
        self.accesses.push(Access::Write(signal, value));
        let rising = self.line(signal) == 0 && value != 0;
        self.lines[signal as usize] = value;

        match signal {
            Signal::ClkLoadn if value == 0 => self.clk_taps = 0,
            Signal::IoLoadn if value == 0 => self.io_taps = 0,
            Signal::ClkMove if rising => self.clk_taps += 1,
            Signal::IoMove if rising => self.io_taps += 1,
            Signal::PhaseStep if rising => {
                if self.line(Signal::PhaseDir) != 0 {
                    self.up_steps += 1
                } else {
                    self.null_steps += 1
                }
            }
            Signal::SlipHr2x90 if rising => self.hr2x90_slips += 1,
            Signal::SlipHr2x if rising => self.hr2x_slips += 1,
            _ => ()
        }
    }

    fn write_word(&mut self, value: u32) {
        self.accesses.push(Access::WriteWord(value));
        if self.stores() {
            self.cell = value;
        }
    }

    fn read_word(&mut self) -> u32 {
        self.accesses.push(Access::ReadWord(self.cell));
        self.cell
    }

    fn flush_l2_cache(&mut self) {
        self.accesses.push(Access::FlushL2);
    }

    fn flush_cpu_dcache(&mut self) {
        self.accesses.push(Access::FlushDcache);
    }
}
