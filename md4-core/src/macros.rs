macro_rules! std {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "std")]
            #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
            $item
        )*
    };
}

macro_rules! embedded_io {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "embedded-io")]
            #[cfg_attr(docsrs, doc(cfg(feature = "embedded-io")))]
            $item
        )*
    };
}

/// Emit a `trace` level event under the crate's target, compiled out entirely without the
/// `tracing` feature.
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(target: "md4_core", $($arg)+);
        }
    };
}
