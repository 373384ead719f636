// Platform-specific load average query

#[cfg(unix)]
pub fn system_load() -> Option<[f64; 3]> {
    let mut avgs = [0.0f64; 3];

    // getloadavg writes at most `nelem` samples into the buffer
    let written = unsafe { libc::getloadavg(avgs.as_mut_ptr(), 3) };

    if written == 3 {
        Some(avgs)
    } else {
        None
    }
}

#[cfg(not(unix))]
pub fn system_load() -> Option<[f64; 3]> {
    None
}
