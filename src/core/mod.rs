pub mod fft;
pub mod fields;
pub mod poly;
#[cfg(test)]
pub mod test_utils;
