// src/macros.rs

/// String shorthand: `s!()` for an empty String, `s!(x)` for String::from(x).
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($e:expr) => {
        ::std::string::String::from($e)
    };
}

/// Concatenate any number of string-ish parts into one String.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        let mut out = ::std::string::String::new();
        $(
            out.push_str(::std::convert::AsRef::<str>::as_ref(&$part));
        )+
        out
    }};
}
