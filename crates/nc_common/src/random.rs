use std::cell::RefCell;
use std::marker::PhantomData;

use log::debug;
use rand::RngCore;
use rand::rngs::StdRng;

use crate::SEEDING_MODE;
use crate::SeedingMode;

thread_local! {
    /// Created on first use, dropped with the thread. Never reseeded.
    static GENERATOR: RefCell<StdRng> = RefCell::new(thread_generator());
}

fn thread_generator() -> StdRng {
    match SEEDING_MODE.generator() {
        Ok(rng) => {
            debug!("New {} generator on {:?}", SEEDING_MODE, std::thread::current().id());
            rng
        }
        // Only reachable if init() was skipped and the entropy source is broken.
        Err(e) => panic!("{}", e),
    }
}

/// The next 64 uniformly distributed bits of the calling thread's generator.
///
/// # Panics
///
/// In `random-device` builds, if the entropy source is unusable and this is
/// the first draw of the process. Call [`crate::init`] at startup to get that
/// error as a `Result` instead.
pub fn next_uniform_bits() -> u64 {
    GENERATOR.with_borrow_mut(|rng| rng.next_u64())
}

/// Run `f` with exclusive access to the calling thread's generator.
///
/// Drawing from the thread generator inside `f` (through this function,
/// [`next_uniform_bits`] or [`LocalRng`]) panics.
pub fn with_rng<F, T>(f: F) -> T
where
    F: FnOnce(&mut StdRng) -> T,
{
    GENERATOR.with_borrow_mut(f)
}

pub fn seeding_mode() -> SeedingMode {
    SEEDING_MODE
}

/// Handle to the calling thread's generator, usable wherever an
/// `R: Rng` is expected:
///
/// ```ignore
/// use rand::Rng;
/// let u: f64 = LocalRng::new().random();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRng {
    _thread_bound: PhantomData<*const ()>,
}

impl LocalRng {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RngCore for LocalRng {
    fn next_u32(&mut self) -> u32 {
        GENERATOR.with_borrow_mut(|rng| rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        next_uniform_bits()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        GENERATOR.with_borrow_mut(|rng| rng.fill_bytes(dst))
    }
}
