#[macro_use]
extern crate lazy_static;

pub mod convert;
pub mod item;
pub mod mapping;
pub mod record;
