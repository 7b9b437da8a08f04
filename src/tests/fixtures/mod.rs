pub mod http;
pub mod rows;
pub mod seed;
