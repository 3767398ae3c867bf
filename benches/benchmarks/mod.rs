pub mod untangle;
