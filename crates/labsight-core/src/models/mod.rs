pub mod response;
pub mod table;
pub mod test_result;
