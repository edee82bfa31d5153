pub mod generator;
pub mod identifier;
pub mod method_count;
pub mod params;

#[doc(hidden)]
pub mod _internal_test_data;
