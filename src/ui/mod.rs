pub mod components;
pub mod pages;
pub mod palette;
pub mod shell;
