// Turns a run of doc comments into a single doc string. With the `doc` feature the
// ```svgbob blocks inside are rendered to inline SVG; without it they stay as text.
#[cfg(feature = "doc")]
macro_rules! svgbob_doc {
    ($($doc:tt)*) => {
        svgbobdoc::transform!($($doc)*)
    };
}

// Inner (`//!`) and outer (`///`) comments are accepted alike.
#[cfg(not(feature = "doc"))]
macro_rules! svgbob_doc {
    ($( # $(!)? [doc = $line:literal] )*) => {
        core::concat!($( $line, "\n" ),*)
    };
}

pub(crate) use svgbob_doc;
