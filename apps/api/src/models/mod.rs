pub mod deed;
