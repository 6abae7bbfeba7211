pub mod db;
pub mod recipes;
