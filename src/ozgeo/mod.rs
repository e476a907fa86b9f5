#![allow(dead_code)]
pub mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod geoids;
pub mod minimal;
pub mod output;
pub mod round;
pub mod text;
pub mod trim;
