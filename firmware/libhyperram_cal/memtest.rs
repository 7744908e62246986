use regs::Registers;

/// Patterns written and read back by `probe`, in order.
///
/// The second pattern catches a cell that ignores writes but still holds
/// the first pattern from an earlier test.
pub const PATTERNS: [u32; 2] = [0xFF55AACD, 0xA3112233];

/// Writes each pattern to the test word, flushes the caches and reads it
/// back. Stops at the first mismatch.
///
/// This is deliberately shallow: one address and two patterns, which is
/// enough to tell whether the PHY samples data correctly at the current
/// timing and cheap enough to repeat thousands of times.
pub fn probe<R: Registers + ?Sized>(regs: &mut R) -> bool {
    PATTERNS.iter().all(|&pattern| {
        regs.write_word(pattern);
        regs.flush_l2_cache();
        regs.flush_cpu_dcache();
        regs.read_word() == pattern
    })
}
