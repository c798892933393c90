use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Process group of the child currently being waited on, 0 when none
static CHILD_GROUP: AtomicI32 = AtomicI32::new(0);

/// The flag set by the SIGINT handler
pub fn interrupt_flag() -> &'static AtomicBool {
    &INTERRUPTED
}

pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Handle SIGINT for the rest of the process.
///
/// The first interrupt is recorded and passed on to the running child's
/// process group, so the child ends and the run can stop with 130. A second
/// interrupt exits with 130 on the spot.
#[cfg(unix)]
pub fn install_interrupt_handler() {
    extern "C" fn on_interrupt(_: libc::c_int) {
        if INTERRUPTED.load(Ordering::SeqCst) {
            unsafe { libc::_exit(130) };
        }
        forward_interrupt(&INTERRUPTED, &CHILD_GROUP);
    }

    let handler = on_interrupt as extern "C" fn(libc::c_int);
    unsafe {
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
    }
}

#[cfg(not(unix))]
pub fn install_interrupt_handler() {}

/// Record an interrupt and send SIGINT to the process group in `child_group`.
///
/// Only async-signal-safe calls are made here.
#[cfg(unix)]
fn forward_interrupt(flag: &AtomicBool, child_group: &AtomicI32) {
    flag.store(true, Ordering::SeqCst);

    let pgid = child_group.load(Ordering::SeqCst);
    if pgid > 0 {
        unsafe { libc::kill(-(pgid as libc::pid_t), libc::SIGINT) };
    }
}

/// Registration of a spawned child as the target of forwarded interrupts.
/// Dropping it clears the registration.
pub struct ChildRegistration;

/// Register a child spawned as the leader of its own process group
pub fn register_child(pid: u32) -> ChildRegistration {
    register_child_in(&INTERRUPTED, &CHILD_GROUP, pid);
    ChildRegistration
}

impl Drop for ChildRegistration {
    fn drop(&mut self) {
        CHILD_GROUP.store(0, Ordering::SeqCst);
    }
}

// An interrupt that landed between spawn and registration is forwarded here.
#[cfg(unix)]
fn register_child_in(flag: &AtomicBool, child_group: &AtomicI32, pid: u32) {
    child_group.store(pid as i32, Ordering::SeqCst);
    if flag.load(Ordering::SeqCst) {
        forward_interrupt(flag, child_group);
    }
}

#[cfg(not(unix))]
fn register_child_in(_: &AtomicBool, child_group: &AtomicI32, pid: u32) {
    child_group.store(pid as i32, Ordering::SeqCst);
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    use std::os::unix::process::{CommandExt, ExitStatusExt};
    use std::process::Command;
    use std::time::{Duration, Instant};

    fn spawn_group_leader(script: &str) -> std::process::Child {
        Command::new("sh")
            .args(["-c", script])
            .process_group(0)
            .spawn()
            .unwrap()
    }

    #[test]
    fn test_forward_interrupt_stops_child_group() {
        let flag = AtomicBool::new(false);
        let child_group = AtomicI32::new(0);
        let mut child = spawn_group_leader("exec sleep 5");
        child_group.store(child.id() as i32, Ordering::SeqCst);

        let start = Instant::now();
        forward_interrupt(&flag, &child_group);
        let status = child.wait().unwrap();

        assert!(flag.load(Ordering::SeqCst));
        assert_eq!(status.signal(), Some(libc::SIGINT));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_forward_without_child_only_records() {
        let flag = AtomicBool::new(false);
        let child_group = AtomicI32::new(0);

        forward_interrupt(&flag, &child_group);
        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_late_registration_still_interrupts_child() {
        let flag = AtomicBool::new(true);
        let child_group = AtomicI32::new(0);
        let mut child = spawn_group_leader("exec sleep 5");

        register_child_in(&flag, &child_group, child.id());
        let status = child.wait().unwrap();

        assert_eq!(status.signal(), Some(libc::SIGINT));
    }
}
