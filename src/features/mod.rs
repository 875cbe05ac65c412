pub mod api;
pub mod demo;
pub mod pages;
