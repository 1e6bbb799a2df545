pub mod db;
pub mod json_list;
pub mod row;
