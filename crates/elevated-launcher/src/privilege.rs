/// Whether the current process already runs with elevated rights, in which
/// case spawning through an elevation tool is unnecessary.
#[cfg(unix)]
pub fn is_elevated() -> bool {
    rustix::process::geteuid().as_raw() == 0
}

#[cfg(windows)]
pub fn is_elevated() -> bool {
    use windows::Win32::UI::Shell::IsUserAnAdmin;

    // SAFETY: Takes no arguments and only inspects the current process token.
    unsafe { IsUserAnAdmin().as_bool() }
}
