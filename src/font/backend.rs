#[cfg(feature="ttfparser-shaper")]
pub mod ttf_parser;
