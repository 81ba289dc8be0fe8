//! Student records use cases

mod service;


pub use service::StudentService;
