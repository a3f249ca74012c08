pub mod canned;
pub mod upstream;
