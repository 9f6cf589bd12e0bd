//======================================================================
// ascon/src/log.rs
// Optional diagnostic hook. Without the `log` feature every call is a no-op.
//
// Only variant names and lengths are ever formatted into a message;
// keys, nonces, plaintext and tags never are.
//======================================================================

#[cfg(feature = "log")]
use alloc::string::String;
#[cfg(feature = "log")]
use core::fmt::{self, Write as FmtWrite};

#[cfg(feature = "log")]
static HOOK: spin::RwLock<Option<fn(&str)>> = spin::RwLock::new(None);

/// Installs the function that receives every diagnostic line.
#[cfg(feature = "log")]
pub fn set_hook(hook: fn(&str)) {
    *HOOK.write() = Some(hook);
}

/// Removes the installed hook, if any.
#[cfg(feature = "log")]
pub fn clear_hook() {
    *HOOK.write() = None;
}

#[cfg(feature = "log")]
pub fn emit(args: fmt::Arguments<'_>) {
    let hook = *HOOK.read();
    if let Some(hook) = hook {
        let mut buf = String::new();
        let _ = FmtWrite::write_fmt(&mut buf, args);
        hook(&buf);
    }
}

#[cfg(not(feature = "log"))]
pub fn set_hook(_: fn(&str)) {}

#[cfg(not(feature = "log"))]
pub fn clear_hook() {}

#[cfg(not(feature = "log"))]
pub fn emit(_: core::fmt::Arguments<'_>) {}

macro_rules! alog {
    ($($tt:tt)*) => {
        $crate::log::emit(core::format_args!($($tt)*))
    };
}
pub(crate) use alog;
