#[cfg(feature = "tracing")]
macro_rules! lbtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "lightbox", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lbtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! lbdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "lightbox", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lbdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! lbwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "lightbox", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lbwarn {
    ($($tt:tt)*) => {};
}
