use crate::state::{Carrier, Star};

/// Generates `"<star name> <n>"` with the smallest `n >= 1` not already used
/// by any carrier in `existing`.
pub fn generate_name(star: &Star, existing: &[Carrier]) -> String {
    let mut n: usize = 1;
    loop {
        let candidate = format!("{} {n}", star.name);
        if !existing.iter().any(|carrier| carrier.name == candidate) {
            return candidate;
        }
        n += 1;
    }
}
