pub mod extract_foods;
