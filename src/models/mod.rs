pub mod seed_model;
