pub mod pearson;
