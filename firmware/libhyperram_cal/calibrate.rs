use core::cmp;
use core::fmt::{self, Write};
use delay::DelayLine;
use clkgen::{PhaseDirection, SubPhase};
use handle::Hardware;

/// Taps on the I/O delay line during the whole sweep. Only the clock axis
/// is searched.
pub const IO_DELAY: u8 = 0;

macro_rules! report {
    ($logger:expr, $( $arg:expr ),+) => (
        if let &mut Some(ref mut f) = $logger {
            let _ = write!(f, $( $arg ),+);
        }
    )
}

/// Limits of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Number of coarse delay settings tried. The clock delay line is
    /// driven with `coarse >> 2` taps.
    pub coarse_steps: u8,
    /// Probes issued at each coarse setting.
    pub probes: u32,
    /// A failure after this many consecutive passes ends probing at the
    /// current setting.
    pub break_window: u32,
    /// Smallest window accepted as a stable operating point.
    pub accept_window: u32,
}

impl Default for Params {
    fn default() -> Params {
        Params {
            coarse_steps:  128,
            probes:        64,
            break_window:  6,
            accept_window: 5,
        }
    }
}

/// The operating point the hardware was left at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibrated {
    pub coarse: u8,
    /// Taps on the clock delay line.
    pub clk_delay: u8,
    pub sub_phase: SubPhase,
    /// Consecutive passes that got `coarse` accepted.
    pub window: u32,
    /// Phase steps issued to move into the middle of the window.
    pub centering_steps: u32,
}

impl fmt::Display for Calibrated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "coarse {} (clk delay {}, slip {}), window {}, centered by {} steps",
               self.coarse, self.clk_delay, self.sub_phase, self.window, self.centering_steps)
    }
}

/// No coarse setting produced an acceptable window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted {
    pub coarse_steps: u8,
    /// Longest run of consecutive passes seen anywhere in the sweep.
    pub longest_run: u32,
}

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no stable window in {} coarse delay steps (longest run {} passes)",
               self.coarse_steps, self.longest_run)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Sweeping(u8),
    Accepting { coarse: u8, window: u32 },
}

struct Point {
    window: u32,
    longest_run: u32,
}

fn sweep_point<H: Hardware + ?Sized>(hw: &mut H, params: &Params, coarse: u8,
                                     logger: &mut Option<&mut dyn fmt::Write>) -> Point {
    let sub_phase = SubPhase::from_coarse(coarse);
    hw.set_delay(DelayLine::Clock, coarse >> 2);
    hw.set_delay(DelayLine::Io, IO_DELAY);

    report!(logger, "{},{} |", coarse >> 2, sub_phase);

    let mut window = 0;
    let mut longest_run = 0;
    for i in 0..params.probes {
        let pass = hw.probe();
        hw.step_phase(PhaseDirection::Null);

        if i & 1 == 1 {
            report!(logger, "{}", if pass { '0' } else { '-' });
        }

        if pass {
            window += 1;
            longest_run = cmp::max(longest_run, window);
        } else if window >= params.break_window {
            // Trailing edge of a window we already trust.
            break
        } else {
            window = 0;
        }
    }

    report!(logger, "| {}    \n", window);
    debug!("coarse {}: clk delay {}, slip {}, window {}",
           coarse, coarse >> 2, sub_phase, window);

    Point { window: window, longest_run: longest_run }
}

fn center<H: Hardware + ?Sized>(hw: &mut H, coarse: u8, window: u32) -> Calibrated {
    // The window was measured from its leading edge; step half of it
    // further to sample in the middle.
    let centering_steps = window / 2;
    for _ in 0..centering_steps {
        hw.step_phase(PhaseDirection::Up);
    }

    Calibrated {
        coarse: coarse,
        clk_delay: coarse >> 2,
        sub_phase: SubPhase::from_coarse(coarse),
        window: window,
        centering_steps: centering_steps,
    }
}

/// Searches for a coarse delay at which the memory test passes reliably
/// and leaves the hardware centered on it.
///
/// Coarse settings are tried in increasing order, never revisited. At each
/// one, `params.probes` probes are issued, each followed by a null phase
/// step. Failures before `params.break_window` consecutive passes only
/// restart the count. A setting is accepted if the final count reaches
/// `params.accept_window`. Moving to the next setting pulses the slip lines
/// selected by its two low bits.
///
/// Progress is written to `logger` one line per coarse setting:
/// `clk_delay,slip90, slip2x |` then one character for every other probe
/// (`0` pass, `-` fail) and `| window`.
pub fn calibrate<H: Hardware + ?Sized>(hw: &mut H, params: &Params,
                                       logger: &mut Option<&mut dyn fmt::Write>)
                                      -> Result<Calibrated, Exhausted> {
    let mut longest_run = 0;
    let mut state = State::Sweeping(0);

    loop {
        state = match state {
            State::Sweeping(coarse) if coarse >= params.coarse_steps => {
                let err = Exhausted {
                    coarse_steps: params.coarse_steps,
                    longest_run: longest_run,
                };
                error!("HyperRAM calibration failed: {}", err);
                return Err(err)
            }
            State::Sweeping(coarse) => {
                let point = sweep_point(hw, params, coarse, logger);
                longest_run = cmp::max(longest_run, point.longest_run);

                if point.window >= params.accept_window {
                    State::Accepting { coarse: coarse, window: point.window }
                } else {
                    let next = coarse + 1;
                    hw.slip(SubPhase::from_coarse(next));
                    State::Sweeping(next)
                }
            }
            State::Accepting { coarse, window } => {
                let cal = center(hw, coarse, window);
                info!("HyperRAM calibrated: {}", cal);
                return Ok(cal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Delay(DelayLine, u8),
        Step(PhaseDirection),
        Slip(SubPhase),
        Probe(bool),
    }

    /// Answers each probe with `outcome(coarse, index)`, where `coarse`
    /// counts the slips seen so far and `index` restarts at every clock
    /// delay change.
    struct Scripted<F> {
        outcome: F,
        coarse: u8,
        index: u32,
        events: Vec<Event>,
    }

    impl<F: FnMut(u8, u32) -> bool> Scripted<F> {
        fn new(outcome: F) -> Scripted<F> {
            Scripted { outcome: outcome, coarse: 0, index: 0, events: Vec::new() }
        }

        fn count(&self, event: Event) -> usize {
            self.events.iter().filter(|&&e| e == event).count()
        }

        fn probes(&self) -> usize {
            self.events.iter().filter(|e| match **e { Event::Probe(_) => true, _ => false }).count()
        }
    }

    impl<F: FnMut(u8, u32) -> bool> Hardware for Scripted<F> {
        fn set_delay(&mut self, line: DelayLine, taps: u8) {
            if line == DelayLine::Clock {
                self.index = 0;
            }
            self.events.push(Event::Delay(line, taps));
        }

        fn step_phase(&mut self, direction: PhaseDirection) {
            self.events.push(Event::Step(direction));
        }

        fn slip(&mut self, sub_phase: SubPhase) {
            self.coarse += 1;
            self.events.push(Event::Slip(sub_phase));
        }

        fn probe(&mut self) -> bool {
            let pass = (self.outcome)(self.coarse, self.index);
            self.index += 1;
            self.events.push(Event::Probe(pass));
            pass
        }
    }

    fn run<H: Hardware>(hw: &mut H, params: &Params) -> (Result<Calibrated, Exhausted>, String) {
        let mut out = String::new();
        let result = {
            let mut logger: Option<&mut dyn fmt::Write> = Some(&mut out);
            calibrate(hw, params, &mut logger)
        };
        (result, out)
    }

    #[test]
    fn always_pass_accepts_first_setting() {
        let mut hw = Scripted::new(|_, _| true);
        let (result, out) = run(&mut hw, &Params::default());

        assert_eq!(result, Ok(Calibrated {
            coarse: 0,
            clk_delay: 0,
            sub_phase: SubPhase::default(),
            window: 64,
            centering_steps: 32,
        }));

        let mut expected = vec![Event::Delay(DelayLine::Clock, 0), Event::Delay(DelayLine::Io, 0)];
        for _ in 0..64 {
            expected.push(Event::Probe(true));
            expected.push(Event::Step(PhaseDirection::Null));
        }
        for _ in 0..32 {
            expected.push(Event::Step(PhaseDirection::Up));
        }
        assert_eq!(hw.events, expected);

        assert_eq!(out, format!("0,0, 0 |{}| 64    \n", "0".repeat(32)));
    }

    #[test]
    fn always_fail_exhausts_every_setting() {
        let mut hw = Scripted::new(|_, _| false);
        let (result, out) = run(&mut hw, &Params::default());

        assert_eq!(result, Err(Exhausted { coarse_steps: 128, longest_run: 0 }));
        assert_eq!(hw.probes(), 128 * 64);
        assert_eq!(hw.count(Event::Step(PhaseDirection::Null)), 128 * 64);
        assert_eq!(hw.count(Event::Step(PhaseDirection::Up)), 0);
        assert_eq!(hw.coarse, 128);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 128);
        for line in lines {
            assert!(line.ends_with(&format!("{}| 0    ", "-".repeat(32))), "{:?}", line);
        }
    }

    #[test]
    fn sweep_is_monotonic_on_clock_axis_only() {
        let mut hw = Scripted::new(|_, _| false);
        let _ = run(&mut hw, &Params::default());

        let clock: Vec<u8> = hw.events.iter().filter_map(|e| match *e {
            Event::Delay(DelayLine::Clock, taps) => Some(taps),
            _ => None
        }).collect();
        let expected: Vec<u8> = (0..128u8).map(|d| d >> 2).collect();
        assert_eq!(clock, expected);

        assert_eq!(hw.count(Event::Delay(DelayLine::Io, 0)), 128);
        assert_eq!(hw.count(Event::Delay(DelayLine::Io, 0)),
                   hw.events.iter().filter(|e| match **e {
                       Event::Delay(DelayLine::Io, _) => true,
                       _ => false
                   }).count());
    }

    #[test]
    fn slips_follow_next_setting() {
        let mut hw = Scripted::new(|_, _| false);
        let _ = run(&mut hw, &Params::default());

        let slips: Vec<SubPhase> = hw.events.iter().filter_map(|e| match *e {
            Event::Slip(sub_phase) => Some(sub_phase),
            _ => None
        }).collect();
        let expected: Vec<SubPhase> = (1..129u16).map(|d| SubPhase::from_coarse(d as u8)).collect();
        assert_eq!(slips, expected);
    }

    #[test]
    fn failure_after_six_passes_breaks_and_centers() {
        let mut hw = Scripted::new(|_, i| i < 6);
        let (result, _) = run(&mut hw, &Params::default());

        let cal = result.unwrap();
        assert_eq!(cal.coarse, 0);
        assert_eq!(cal.window, 6);
        assert_eq!(cal.centering_steps, 3);
        // Six passes and the failure that ended the window.
        assert_eq!(hw.probes(), 7);
        assert_eq!(hw.count(Event::Step(PhaseDirection::Null)), 7);
        assert_eq!(hw.count(Event::Step(PhaseDirection::Up)), 3);
    }

    #[test]
    fn failure_after_ten_passes_breaks_at_iteration_ten() {
        let mut hw = Scripted::new(|_, i| i < 10);
        let (result, out) = run(&mut hw, &Params::default());

        let cal = result.unwrap();
        assert_eq!(cal.window, 10);
        assert_eq!(cal.centering_steps, 5);
        assert_eq!(hw.probes(), 11);
        assert_eq!(hw.count(Event::Step(PhaseDirection::Up)), 5);
        assert_eq!(out, "0,0, 0 |00000| 10    \n");
    }

    #[test]
    fn phase_step_follows_every_probe() {
        let mut hw = Scripted::new(|_, i| i < 10);
        let _ = run(&mut hw, &Params::default());

        let probing = &hw.events[2..2 + 2 * 11];
        for pair in probing.chunks(2) {
            match pair[0] {
                Event::Probe(_) => (),
                other => panic!("expected probe, got {:?}", other),
            }
            assert_eq!(pair[1], Event::Step(PhaseDirection::Null));
        }
    }

    #[test]
    fn short_runs_restart_window_at_same_setting() {
        // Four passes, then failures everywhere.
        let mut hw = Scripted::new(|coarse, i| coarse == 0 && i < 4);
        let (result, out) = run(&mut hw, &Params::default());

        assert_eq!(result, Err(Exhausted { coarse_steps: 128, longest_run: 4 }));
        let first = out.lines().next().unwrap();
        assert_eq!(first, format!("0,0, 0 |00{}| 0    ", "-".repeat(30)));
        // All 64 probes were spent on the first setting.
        assert_eq!(hw.events.iter()
                       .take_while(|e| **e != Event::Slip(SubPhase::from_coarse(1)))
                       .filter(|e| match **e { Event::Probe(_) => true, _ => false })
                       .count(), 64);
    }

    #[test]
    fn short_runs_advance_to_next_setting() {
        let mut hw = Scripted::new(|coarse, i| if coarse == 0 { i < 4 } else { true });
        let (result, out) = run(&mut hw, &Params::default());

        let cal = result.unwrap();
        assert_eq!(cal.coarse, 1);
        assert_eq!(cal.sub_phase, SubPhase { hr2x90: true, hr2x: false });
        assert_eq!(cal.window, 64);
        assert_eq!(hw.probes(), 128);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("0,1, 0 |"));
    }

    #[test]
    fn noise_below_break_threshold_is_not_accepted() {
        // Five passes, one failure, repeated: never six in a row, and the
        // final run of four falls short of acceptance.
        let mut hw = Scripted::new(|coarse, i| coarse == 0 && i % 6 != 5);
        let (result, _) = run(&mut hw, &Params::default());

        assert_eq!(result.unwrap_err().longest_run, 5);
        assert_eq!(hw.events.iter()
                       .take_while(|e| **e != Event::Slip(SubPhase::from_coarse(1)))
                       .filter(|e| match **e { Event::Probe(_) => true, _ => false })
                       .count(), 64);
    }

    #[test]
    fn trailing_window_of_five_is_accepted() {
        let mut hw = Scripted::new(|_, i| i >= 59);
        let (result, out) = run(&mut hw, &Params::default());

        let cal = result.unwrap();
        assert_eq!(cal.coarse, 0);
        assert_eq!(cal.window, 5);
        assert_eq!(cal.centering_steps, 2);
        assert_eq!(hw.probes(), 64);
        assert!(out.ends_with("| 5    \n"));
    }

    #[test]
    fn report_lines_show_delay_and_slip_bits() {
        let mut hw = Scripted::new(|coarse, _| coarse == 6);
        let (result, out) = run(&mut hw, &Params::default());

        assert_eq!(result.unwrap().clk_delay, 1);
        let prefixes: Vec<&str> = out.lines().map(|line| &line[..line.find('|').unwrap()]).collect();
        assert_eq!(prefixes, vec![
            "0,0, 0 ", "0,1, 0 ", "0,0, 1 ", "0,1, 1 ",
            "1,0, 0 ", "1,1, 0 ", "1,0, 1 ",
        ]);
    }

    #[test]
    fn works_without_logger() {
        let mut hw = Scripted::new(|coarse, _| coarse == 2);
        let cal = calibrate(&mut hw, &Params::default(), &mut None).unwrap();
        assert_eq!(cal.coarse, 2);
    }

    #[test]
    fn params_bound_the_search() {
        let params = Params { coarse_steps: 4, probes: 8, ..Params::default() };
        let mut hw = Scripted::new(|_, _| false);
        let (result, out) = run(&mut hw, &params);

        assert_eq!(result, Err(Exhausted { coarse_steps: 4, longest_run: 0 }));
        assert_eq!(hw.probes(), 32);
        assert_eq!(out.lines().count(), 4);
        assert!(out.starts_with("0,0, 0 |----| 0    \n"));
    }

    #[test]
    fn display() {
        let err = Exhausted { coarse_steps: 128, longest_run: 4 };
        assert_eq!(format!("{}", err),
                   "no stable window in 128 coarse delay steps (longest run 4 passes)");

        let cal = Calibrated {
            coarse: 13,
            clk_delay: 3,
            sub_phase: SubPhase::from_coarse(13),
            window: 9,
            centering_steps: 4,
        };
        assert_eq!(format!("{}", cal),
                   "coarse 13 (clk delay 3, slip 1, 0), window 9, centered by 4 steps");
    }
}
