// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate anything `AsRef<str>` into one owned `String`, single allocation.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {
        [$(::core::convert::AsRef::<str>::as_ref(&$part)),+].concat()
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn join_mixes_borrowed_and_owned() {
        let stem = s!("tv");
        assert_eq!(join!("ignore_", stem, ".json"), "ignore_tv.json");
        assert_eq!(join!(s!("a")), "a");
        assert_eq!(s!(), "");
    }
}
