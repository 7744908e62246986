#[allow(dead_code)]
pub mod mem {
  pub const ROM_BASE: usize = 0x00000000;
  pub const ROM_SIZE: usize = 0x00008000;

  pub const SRAM_BASE: usize = 0x10000000;
  pub const SRAM_SIZE: usize = 0x00002000;

  pub const MAIN_RAM_BASE: usize = 0x20000000;
  pub const MAIN_RAM_SIZE: usize = 0x00800000;

  pub const HYPERRAM_BASE: usize = 0x20000000;
  pub const HYPERRAM_SIZE: usize = 0x00800000;

  pub const CSR_BASE: usize = 0xf0000000;
  pub const CSR_SIZE: usize = 0x00010000;

}
