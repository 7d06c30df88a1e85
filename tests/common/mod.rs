#![allow(dead_code)]

pub mod glb;
pub mod test_utils;
