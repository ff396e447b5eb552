pub mod pages;
pub mod projects;
