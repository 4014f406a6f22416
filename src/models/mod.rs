pub mod manifest;

pub use manifest::{Download, Downloads, Manifest};
