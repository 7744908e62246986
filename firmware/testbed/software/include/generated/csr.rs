#[allow(dead_code)]
pub mod csr {
  pub const CTRL_BASE: *mut u32 = 0xf0000000 as *mut u32;

  pub mod ctrl {
    #[allow(unused_imports)]
    use core::ptr::{read_volatile, write_volatile};

    pub const RESET_ADDR: *mut u32 = 0xf0000000 as *mut u32;
    pub const RESET_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn reset_write(w: u8) {
      write_volatile(RESET_ADDR.offset(0), (w) as u32);
    }

    pub const SCRATCH_ADDR: *mut u32 = 0xf0000004 as *mut u32;
    pub const SCRATCH_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn scratch_read() -> u32 {
      read_volatile(SCRATCH_ADDR) as u32
    }

    #[inline(always)]
    pub unsafe fn scratch_write(w: u32) {
      write_volatile(SCRATCH_ADDR.offset(0), (w) as u32);
    }

    pub const BUS_ERRORS_ADDR: *mut u32 = 0xf0000008 as *mut u32;
    pub const BUS_ERRORS_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn bus_errors_read() -> u32 {
      read_volatile(BUS_ERRORS_ADDR) as u32
    }

  }

  pub const CRG_BASE: *mut u32 = 0xf0000800 as *mut u32;

  pub mod crg {
    #[allow(unused_imports)]
    use core::ptr::{read_volatile, write_volatile};

    pub const PHASE_SEL_ADDR: *mut u32 = 0xf0000800 as *mut u32;
    pub const PHASE_SEL_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn phase_sel_write(w: u8) {
      write_volatile(PHASE_SEL_ADDR.offset(0), (w) as u32);
    }

    pub const PHASE_DIR_ADDR: *mut u32 = 0xf0000804 as *mut u32;
    pub const PHASE_DIR_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn phase_dir_write(w: u8) {
      write_volatile(PHASE_DIR_ADDR.offset(0), (w) as u32);
    }

    pub const PHASE_STEP_ADDR: *mut u32 = 0xf0000808 as *mut u32;
    pub const PHASE_STEP_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn phase_step_write(w: u8) {
      write_volatile(PHASE_STEP_ADDR.offset(0), (w) as u32);
    }

    pub const SLIP_HR2X_ADDR: *mut u32 = 0xf000080c as *mut u32;
    pub const SLIP_HR2X_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn slip_hr2x_write(w: u8) {
      write_volatile(SLIP_HR2X_ADDR.offset(0), (w) as u32);
    }

    pub const SLIP_HR2X90_ADDR: *mut u32 = 0xf0000810 as *mut u32;
    pub const SLIP_HR2X90_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn slip_hr2x90_write(w: u8) {
      write_volatile(SLIP_HR2X90_ADDR.offset(0), (w) as u32);
    }

  }

  pub const HYPERRAM_BASE: *mut u32 = 0xf0001000 as *mut u32;

  pub mod hyperram {
    #[allow(unused_imports)]
    use core::ptr::{read_volatile, write_volatile};

    pub const IO_LOADN_ADDR: *mut u32 = 0xf0001000 as *mut u32;
    pub const IO_LOADN_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn io_loadn_write(w: u8) {
      write_volatile(IO_LOADN_ADDR.offset(0), (w) as u32);
    }

    pub const IO_MOVE_ADDR: *mut u32 = 0xf0001004 as *mut u32;
    pub const IO_MOVE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn io_move_write(w: u8) {
      write_volatile(IO_MOVE_ADDR.offset(0), (w) as u32);
    }

    pub const IO_DIRECTION_ADDR: *mut u32 = 0xf0001008 as *mut u32;
    pub const IO_DIRECTION_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn io_direction_write(w: u8) {
      write_volatile(IO_DIRECTION_ADDR.offset(0), (w) as u32);
    }

    pub const CLK_LOADN_ADDR: *mut u32 = 0xf000100c as *mut u32;
    pub const CLK_LOADN_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn clk_loadn_write(w: u8) {
      write_volatile(CLK_LOADN_ADDR.offset(0), (w) as u32);
    }

    pub const CLK_MOVE_ADDR: *mut u32 = 0xf0001010 as *mut u32;
    pub const CLK_MOVE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn clk_move_write(w: u8) {
      write_volatile(CLK_MOVE_ADDR.offset(0), (w) as u32);
    }

    pub const CLK_DIRECTION_ADDR: *mut u32 = 0xf0001014 as *mut u32;
    pub const CLK_DIRECTION_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn clk_direction_write(w: u8) {
      write_volatile(CLK_DIRECTION_ADDR.offset(0), (w) as u32);
    }

  }

  pub const TIMER0_BASE: *mut u32 = 0xf0001800 as *mut u32;

  pub mod timer0 {
    #[allow(unused_imports)]
    use core::ptr::{read_volatile, write_volatile};

    pub const LOAD_ADDR: *mut u32 = 0xf0001800 as *mut u32;
    pub const LOAD_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn load_read() -> u32 {
      read_volatile(LOAD_ADDR) as u32
    }

    #[inline(always)]
    pub unsafe fn load_write(w: u32) {
      write_volatile(LOAD_ADDR.offset(0), (w) as u32);
    }

    pub const RELOAD_ADDR: *mut u32 = 0xf0001804 as *mut u32;
    pub const RELOAD_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn reload_read() -> u32 {
      read_volatile(RELOAD_ADDR) as u32
    }

    #[inline(always)]
    pub unsafe fn reload_write(w: u32) {
      write_volatile(RELOAD_ADDR.offset(0), (w) as u32);
    }

    pub const EN_ADDR: *mut u32 = 0xf0001808 as *mut u32;
    pub const EN_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn en_read() -> u8 {
      read_volatile(EN_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn en_write(w: u8) {
      write_volatile(EN_ADDR.offset(0), (w) as u32);
    }

    pub const UPDATE_VALUE_ADDR: *mut u32 = 0xf000180c as *mut u32;
    pub const UPDATE_VALUE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn update_value_read() -> u8 {
      read_volatile(UPDATE_VALUE_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn update_value_write(w: u8) {
      write_volatile(UPDATE_VALUE_ADDR.offset(0), (w) as u32);
    }

    pub const VALUE_ADDR: *mut u32 = 0xf0001810 as *mut u32;
    pub const VALUE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn value_read() -> u32 {
      read_volatile(VALUE_ADDR) as u32
    }

    pub const EV_STATUS_ADDR: *mut u32 = 0xf0001814 as *mut u32;
    pub const EV_STATUS_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_status_read() -> u8 {
      read_volatile(EV_STATUS_ADDR) as u8
    }

    pub const EV_PENDING_ADDR: *mut u32 = 0xf0001818 as *mut u32;
    pub const EV_PENDING_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_pending_read() -> u8 {
      read_volatile(EV_PENDING_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn ev_pending_write(w: u8) {
      write_volatile(EV_PENDING_ADDR.offset(0), (w) as u32);
    }

    pub const EV_ENABLE_ADDR: *mut u32 = 0xf000181c as *mut u32;
    pub const EV_ENABLE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_enable_read() -> u8 {
      read_volatile(EV_ENABLE_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn ev_enable_write(w: u8) {
      write_volatile(EV_ENABLE_ADDR.offset(0), (w) as u32);
    }

  }

  pub const UART_BASE: *mut u32 = 0xf0002000 as *mut u32;

  pub mod uart {
    #[allow(unused_imports)]
    use core::ptr::{read_volatile, write_volatile};

    pub const RXTX_ADDR: *mut u32 = 0xf0002000 as *mut u32;
    pub const RXTX_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn rxtx_read() -> u8 {
      read_volatile(RXTX_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn rxtx_write(w: u8) {
      write_volatile(RXTX_ADDR.offset(0), (w) as u32);
    }

    pub const TXFULL_ADDR: *mut u32 = 0xf0002004 as *mut u32;
    pub const TXFULL_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn txfull_read() -> u8 {
      read_volatile(TXFULL_ADDR) as u8
    }

    pub const RXEMPTY_ADDR: *mut u32 = 0xf0002008 as *mut u32;
    pub const RXEMPTY_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn rxempty_read() -> u8 {
      read_volatile(RXEMPTY_ADDR) as u8
    }

    pub const EV_STATUS_ADDR: *mut u32 = 0xf000200c as *mut u32;
    pub const EV_STATUS_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_status_read() -> u8 {
      read_volatile(EV_STATUS_ADDR) as u8
    }

    pub const EV_PENDING_ADDR: *mut u32 = 0xf0002010 as *mut u32;
    pub const EV_PENDING_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_pending_read() -> u8 {
      read_volatile(EV_PENDING_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn ev_pending_write(w: u8) {
      write_volatile(EV_PENDING_ADDR.offset(0), (w) as u32);
    }

    pub const EV_ENABLE_ADDR: *mut u32 = 0xf0002014 as *mut u32;
    pub const EV_ENABLE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_enable_read() -> u8 {
      read_volatile(EV_ENABLE_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn ev_enable_write(w: u8) {
      write_volatile(EV_ENABLE_ADDR.offset(0), (w) as u32);
    }

  }

  pub const CONFIG_CLOCK_FREQUENCY: u32 = 48000000;
  pub const CONFIG_CPU_TYPE_VEXRISCV: u32 = 1;
  pub const CONFIG_IDENTIFIER_STR: &'static str = "hyperram testbed";
  pub const CONFIG_L2_SIZE: u32 = 8192;
  pub const CONFIG_SOC_PLATFORM: &'static str = "testbed";
}
