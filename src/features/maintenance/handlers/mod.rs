mod maintenance_handler;

pub use maintenance_handler::*;
